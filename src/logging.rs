mod filter_log_context;
