use crate::{
    catalog::{Attempt, FilterState},
    error::Error as CatalogError,
};
use std::{future::Future, time::Duration};
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Runs attempts one after another and returns the result of the first one that succeeds.
/// An attempt is only issued once the previous one has definitively failed or timed out, and
/// nothing is issued after the first success. Returns `None` if every attempt failed.
pub async fn first_success<T, F, Fut>(
    query: &'static str,
    attempts: Vec<Attempt>,
    attempt_timeout: Duration,
    mut fetch: F,
) -> Option<(Attempt, T)>
where
    F: FnMut(FilterState) -> Fut,
    Fut: Future<Output = anyhow::Result<T>>,
{
    let attempts_count = attempts.len();
    for (index, attempt) in attempts.into_iter().enumerate() {
        debug!(
            catalog.query = query,
            attempt.name = attempt.name,
            attempt.index = index,
            filter = ?attempt.state.log_context(),
            "Issuing catalog query."
        );

        match timeout(attempt_timeout, fetch(attempt.state.clone())).await {
            Ok(Ok(value)) => {
                if index > 0 {
                    info!(
                        catalog.query = query,
                        attempt.name = attempt.name,
                        attempt.index = index,
                        filter = ?attempt.state.log_context(),
                        "Catalog query succeeded with relaxed filters."
                    );
                }
                return Some((attempt, value));
            }
            Ok(Err(err)) => {
                warn!(
                    catalog.query = query,
                    attempt.name = attempt.name,
                    attempt.index = index,
                    attempts = attempts_count,
                    error.kind = ?CatalogError::kind_of(&err),
                    filter = ?attempt.state.log_context(),
                    "Catalog query failed: {err:?}"
                );
            }
            Err(_) => {
                warn!(
                    catalog.query = query,
                    attempt.name = attempt.name,
                    attempt.index = index,
                    attempts = attempts_count,
                    filter = ?attempt.state.log_context(),
                    "Catalog query timed out after {attempt_timeout:?}."
                );
            }
        }
    }

    None
}
