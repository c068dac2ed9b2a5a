//! Error bodies as actix-web responses

use actix_web::{http::StatusCode, HttpResponse};

pub use aegis_shared::ErrorResponse;

/// Builds a `{error}` JSON response with the given status
pub trait ErrorResponseExt {
    fn to_response(&self, status: StatusCode) -> HttpResponse;
}

impl ErrorResponseExt for ErrorResponse {
    fn to_response(&self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status).json(self)
    }
}
