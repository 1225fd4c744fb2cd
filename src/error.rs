use thiserror::Error;

/// Fault reported by a [`DocumentStore`](crate::store::DocumentStore)
/// implementation. A missing document is *not* an error; adapters return
/// `Ok(None)` for that case so callers can branch on absence separately
/// from a store fault.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("store backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}
