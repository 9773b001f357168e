//! Mapping of request failures onto HTTP responses.

use axum::{
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};

use crate::{domain::HandshakeRejection, infrastructure::static_files::StaticFileError};

pub(super) const NOT_FOUND_BODY: &str =
    "<html><head><title>404</title></head><body>File Not Found!</body></html>";
pub(super) const FORBIDDEN_BODY: &str =
    "<html><head><title>403</title></head><body>Invalid Request</body></html>";

impl IntoResponse for StaticFileError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, Html(NOT_FOUND_BODY)).into_response(),
            Self::Forbidden(_) => (StatusCode::FORBIDDEN, Html(FORBIDDEN_BODY)).into_response(),
            Self::UnsupportedMethod(_) => (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::CONTENT_TYPE, "text/plain")],
                self.to_string(),
            )
                .into_response(),
        }
    }
}

impl IntoResponse for HandshakeRejection {
    fn into_response(self) -> Response {
        match self {
            Self::UnknownResource(_) => StatusCode::NOT_FOUND.into_response(),
            Self::ForbiddenOrigin(_) => StatusCode::FORBIDDEN.into_response(),
        }
    }
}
