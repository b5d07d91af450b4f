use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// HTTP status code, repeated in the body
    pub status: u16,
    /// Error category
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, name: &str, message: impl Into<String>) -> Json<Self> {
        Json(Self {
            status: status.as_u16(),
            name: name.to_string(),
            message: message.into(),
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
