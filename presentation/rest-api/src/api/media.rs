use poem::{Body, Request, http::StatusCode};
use poem_openapi::payload::Json;
use serde_json::Value;

use crate::api::error::ErrorResponse;

pub const APPLICATION_JSON: &str = "application/json";

/// Rejects requests whose `Content-Type` is not exactly `application/json`.
pub fn require_json(req: &Request) -> Result<(), Json<ErrorResponse>> {
    match req.content_type() {
        Some(APPLICATION_JSON) => Ok(()),
        other => {
            tracing::warn!(content_type = ?other, "Rejected request with unsupported media type");
            Err(ErrorResponse::new(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UnsupportedMediaType",
                format!("Content-Type must be {APPLICATION_JSON}"),
            ))
        }
    }
}

/// Reads the request body as JSON. Empty or malformed bodies become
/// `Value::Null`, which the domain rejects as bad data.
pub async fn read_json(body: Body) -> Value {
    body.into_json::<Value>().await.unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::http::header;

    #[test]
    fn should_accept_exact_json_content_type() {
        let req = Request::builder()
            .header(header::CONTENT_TYPE, "application/json")
            .finish();

        assert!(require_json(&req).is_ok());
    }

    #[test]
    fn should_reject_missing_content_type() {
        let req = Request::builder().finish();

        let err = require_json(&req).unwrap_err();

        assert_eq!(err.0.status, 415);
        assert_eq!(err.0.message, "Content-Type must be application/json");
    }

    #[test]
    fn should_reject_other_content_types() {
        let req = Request::builder()
            .header(header::CONTENT_TYPE, "text/html")
            .finish();

        assert!(require_json(&req).is_err());
    }

    #[tokio::test]
    async fn should_turn_unparseable_body_into_null() {
        let value = read_json(Body::from_string("not json".to_string())).await;

        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn should_read_json_object() {
        let value = read_json(Body::from_string(r#"{"name":"Bday"}"#.to_string())).await;

        assert_eq!(value["name"], "Bday");
    }
}
