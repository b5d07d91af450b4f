use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::item::errors::ItemError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::repository_error::classify;

impl IntoErrorResponse for ItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ItemError::Validation(_) => (StatusCode::BAD_REQUEST, "ValidationError"),
            ItemError::WishlistNotFound(_) | ItemError::NotFound { .. } | ItemError::NoItems(_) => {
                (StatusCode::NOT_FOUND, "NotFound")
            }
            ItemError::Repository(e) => classify(e),
        };

        let message = match &self {
            ItemError::Repository(e) => e.to_string(),
            other => other.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(error = %message, "Item request failed");
        }

        (status, ErrorResponse::new(status, name, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::{DataValidationError, RepositoryError};

    #[test]
    fn should_map_missing_parent_to_not_found() {
        let (status, json) = ItemError::WishlistNotFound(5).into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.message, "Wishlist with id '5' was not found.");
    }

    #[test]
    fn should_map_empty_item_list_to_not_found() {
        let (status, _) = ItemError::NoItems(5).into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_map_bad_body_to_bad_request() {
        let (status, json) =
            ItemError::Validation(DataValidationError::BadData { entity: "item" })
                .into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json.0.message,
            "Invalid item: body of request contained bad or no data"
        );
    }

    #[test]
    fn should_map_unavailable_store_to_service_unavailable() {
        let (status, _) = ItemError::Repository(RepositoryError::Unavailable).into_error_response();

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
