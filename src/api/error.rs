//! JSON error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::Error;

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    /// Raw `number` parameter as received, echoed back to the client
    number: Option<String>,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>, number: Option<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
            number,
        }
    }

    pub fn missing_number() -> Self {
        Self::bad_request("Missing 'number' query parameter.", None)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
            number: None,
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidNumber { raw, reason } => Self::bad_request(
                format!("Invalid input. Please provide a valid number ({}).", reason),
                Some(raw),
            ),
            other => Self::internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": true,
            "message": self.message,
            "number": self.number,
        }));
        (self.status, body).into_response()
    }
}
