use poem::http::StatusCode;

use business::domain::errors::RepositoryError;

/// Status and category for a repository failure that reached the handler.
pub fn classify(error: &RepositoryError) -> (StatusCode, &'static str) {
    match error {
        RepositoryError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
        RepositoryError::Validation(_) => (StatusCode::BAD_REQUEST, "ValidationError"),
        RepositoryError::Unavailable => (StatusCode::SERVICE_UNAVAILABLE, "ServiceUnavailable"),
        RepositoryError::DatabaseError => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
    }
}
