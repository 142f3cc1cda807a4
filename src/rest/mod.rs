use crate::SchemaError;
use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde_json::json;

impl IntoResponse for SchemaError {
    fn into_response(self) -> Response {
        match &self {
            SchemaError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": self.to_string(), "field": e.field()})),
            )
                .into_response(),
            SchemaError::Decoding(_) => (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": self.to_string()})),
            )
                .into_response(),
        }
    }
}
