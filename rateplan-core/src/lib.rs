pub mod repository;

pub use repository::FeedRepository;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    ValidationError(String),
    #[error("Feed unavailable: {0}")]
    FeedError(String),
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

impl CoreError {
    /// True when the caller sent something we cannot price; never retried.
    pub fn is_client_error(&self) -> bool {
        matches!(self, CoreError::ValidationError(_))
    }
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(CoreError::ValidationError("occupancy must be in [0,1]".into()).is_client_error());
        assert!(!CoreError::FeedError("timeout".into()).is_client_error());
        assert!(!CoreError::InternalError("boom".into()).is_client_error());
        assert_eq!(
            CoreError::ValidationError("Missing required param: hotelId".into()).to_string(),
            "Missing required param: hotelId"
        );
    }
}
