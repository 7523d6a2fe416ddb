use actix_web::{http::header, http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use super::{MintError, MintErrorKind};
use crate::models::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Mint(#[from] MintError),

    #[error("{0}")]
    BadRequest(String),

    #[error("Método não permitido. Use {0}.")]
    MethodNotAllowed(&'static str),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Mint(MintError::Validation(_)) | ApiError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Mint(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());

        match self {
            ApiError::Mint(err) => builder.json(
                ApiResponse::<()>::error(err.to_string())
                    .with_details(err.details())
                    .with_kind(err.kind().as_ref()),
            ),
            ApiError::MethodNotAllowed(allowed) => builder
                .insert_header((header::ALLOW, *allowed))
                .json(
                    ApiResponse::<()>::error(self.to_string()).with_kind("METHOD_NOT_ALLOWED"),
                ),
            ApiError::BadRequest(_) => builder.json(
                ApiResponse::<()>::error(self.to_string())
                    .with_kind(MintErrorKind::ValidationError.as_ref()),
            ),
        }
    }
}
