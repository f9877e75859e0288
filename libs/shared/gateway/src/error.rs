use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Authentication rejected: {0}")]
    Auth(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Hospital API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl GatewayError {
    /// Conflicts are recoverable from the user's point of view: the mutation
    /// was rejected because of concurrent state change, and re-initiating it
    /// against fresh data is safe.
    pub fn is_conflict(&self) -> bool {
        matches!(self, GatewayError::Conflict(_))
    }
}
