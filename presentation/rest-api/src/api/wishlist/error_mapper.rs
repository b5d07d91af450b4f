use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::wishlist::errors::WishlistError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::repository_error::classify;

impl IntoErrorResponse for WishlistError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            WishlistError::Validation(_) => (StatusCode::BAD_REQUEST, "ValidationError"),
            WishlistError::NotFound(_) => (StatusCode::NOT_FOUND, "NotFound"),
            WishlistError::Repository(e) => classify(e),
        };

        let message = match &self {
            WishlistError::Repository(e) => e.to_string(),
            other => other.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(error = %message, "Wishlist request failed");
        }

        (status, ErrorResponse::new(status, name, message))
    }
}
