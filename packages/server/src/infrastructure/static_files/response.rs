//! Client-side handler for plain HTTP responses.
//!
//! The counterpart of [`StaticRequestHandler`](super::StaticRequestHandler)
//! for a process acting as a client: only `200 OK` yields a body.

use axum::http::{Response, StatusCode};
use thiserror::Error;

/// A response that carried no usable body
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResponseError {
    #[error("Unexpected response status {code}: {reason}")]
    Status { code: u16, reason: String },
}

/// Response handler for the client role
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseHandler;

impl ResponseHandler {
    pub fn new() -> Self {
        Self
    }

    /// Take the body of a successful response, or report its status.
    pub fn process(&self, response: Response<Vec<u8>>) -> Result<Vec<u8>, ResponseError> {
        let status = response.status();
        if status == StatusCode::OK {
            return Ok(response.into_body());
        }

        let reason = status.canonical_reason().unwrap_or("Unknown Status");
        tracing::debug!("Response not processed: {} {}", status.as_u16(), reason);
        Err(ResponseError::Status {
            code: status.as_u16(),
            reason: reason.to_string(),
        })
    }
}
