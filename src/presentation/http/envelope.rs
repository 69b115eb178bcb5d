use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::validation::FieldErrors;

/// Wire shape shared by every endpoint, success or failure.
///
/// The body always carries exactly these three keys; `data` serializes as
/// `null` when there is no payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: String,
}

impl<T: Serialize> Envelope<T> {
    /// Pure builder: wraps `data` and finalizes with the given status.
    pub fn build(
        success: bool,
        data: Option<T>,
        message: impl Into<String>,
        status: StatusCode,
    ) -> Response {
        let envelope = Self {
            success,
            data,
            message: message.into(),
        };
        (status, Json(envelope)).into_response()
    }
}

pub fn ok<T: Serialize>(data: T, message: &str) -> Response {
    Envelope::build(true, Some(data), message, StatusCode::OK)
}

pub fn created<T: Serialize>(data: T, message: &str) -> Response {
    Envelope::build(true, Some(data), message, StatusCode::CREATED)
}

/// Success without a payload; `data` stays `null` in the body.
pub fn ok_empty(message: &str) -> Response {
    Envelope::<serde_json::Value>::build(true, None, message, StatusCode::OK)
}

/// Failure envelope; `errors` fills `data` on validation failures.
pub fn failure(status: StatusCode, errors: Option<FieldErrors>, message: &str) -> Response {
    Envelope::build(false, errors, message, status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{Value, json};

    async fn body_json(response: Response) -> (StatusCode, Value) {
        let status = response.status();
        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn ok_wraps_data_with_all_three_keys() {
        let (status, body) = body_json(ok(json!({"id": 1}), "done")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"], json!({"id": 1}));
        assert_eq!(body["message"], json!("done"));
        assert_eq!(body.as_object().map(|o| o.len()), Some(3));
    }

    #[tokio::test]
    async fn empty_success_serializes_data_as_null() {
        let (status, body) = body_json(ok_empty("gone")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert!(body["data"].is_null());
        assert_eq!(body.as_object().map(|o| o.len()), Some(3));
    }

    #[tokio::test]
    async fn failure_without_errors_keeps_data_null() {
        let (status, body) =
            body_json(failure(StatusCode::NOT_FOUND, None, "Resource not found")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], json!(false));
        assert!(body["data"].is_null());
        assert_eq!(body["message"], json!("Resource not found"));
    }

    #[tokio::test]
    async fn failure_with_field_errors_fills_data() {
        let mut errors = FieldErrors::new();
        errors.push("title", "title must be a non-empty string");

        let (status, body) = body_json(failure(
            StatusCode::UNPROCESSABLE_ENTITY,
            Some(errors),
            "Validation Error",
        ))
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body["data"],
            json!({"title": ["title must be a non-empty string"]})
        );
    }
}
