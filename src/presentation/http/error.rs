use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::application::{ApplicationResult, error::ApplicationError, validation::FieldErrors};
use crate::domain::errors::DomainError;
use crate::presentation::http::envelope;

/// An application failure classified into its wire representation.
///
/// Classification is total: every `ApplicationError` lands on exactly one of
/// 422, 404 or 500, so handlers never match on error variants themselves.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
    errors: Option<FieldErrors>,
}

impl ApiError {
    pub fn classify(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(errors) => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: "Validation Error",
                errors: Some(errors),
            },
            ApplicationError::NotFound(_) | ApplicationError::Domain(DomainError::NotFound(_)) => {
                Self {
                    status: StatusCode::NOT_FOUND,
                    message: "Resource not found",
                    errors: None,
                }
            }
            // Persistence faults, corrupt rows and the like: log the detail,
            // keep it off the wire.
            other => {
                tracing::error!(error = %other, "request failed");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "Internal Server Error",
                    errors: None,
                }
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        envelope::failure(self.status, self.errors, self.message)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

pub trait IntoApiResult<T> {
    fn into_api(self) -> ApiResult<T>;
}

impl<T> IntoApiResult<T> for ApplicationResult<T> {
    fn into_api(self) -> ApiResult<T> {
        self.map_err(ApiError::classify)
    }
}
