use serde_derive::Serialize;

/// Server status reported by the status endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct Status {
    pub version: String,
}
