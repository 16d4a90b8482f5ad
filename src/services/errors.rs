use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Failures surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The identifier supplied by the client is not a positive integer.
    #[error("{0}")]
    InvalidId(String),

    /// The query string could not be decoded.
    #[error("{0}")]
    InvalidQuery(String),

    #[error("{0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// Stable machine-readable code placed in error envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::InvalidId(_) => "INVALID_ID",
            ServiceError::InvalidQuery(_) => "INVALID_QUERY",
            ServiceError::NotFound(_) => "NOT_FOUND",
            ServiceError::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, ServiceError::Internal(_))
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound("Entity not found".to_string()),
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_the_error_taxonomy() {
        assert_eq!(ServiceError::InvalidId("x".into()).code(), "INVALID_ID");
        assert_eq!(ServiceError::NotFound("x".into()).code(), "NOT_FOUND");
        assert_eq!(
            ServiceError::Internal("x".into()).code(),
            "INTERNAL_SERVER_ERROR"
        );
    }

    #[test]
    fn repository_faults_become_internal() {
        let err = ServiceError::from(RepositoryError::ConnectionError("down".into()));
        assert!(err.is_internal());
        let err = ServiceError::from(RepositoryError::NotFound);
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
