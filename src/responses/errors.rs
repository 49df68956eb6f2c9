use crate::config::Environment;
use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use serde::Serialize;
use tracing::error;

#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
    pub message: String,
}

/// Convert a ServerError into a JSON error response.
///
/// Internal errors keep their detail only outside production.
pub fn error_to_response(err: ServerError, env: Environment) -> Response {
    let message = match &err {
        ServerError::Internal(detail) => {
            error!(error = %detail, "request failed");
            if env.exposes_errors() {
                detail.clone()
            } else {
                "An error occurred".to_string()
            }
        }
        other => other.to_string(),
    };

    json_error_response(err.status(), err.label(), message)
}

/// Build the `{ error, message }` body by hand so this path cannot fail.
pub fn json_error_response(status: u16, label: &str, message: String) -> Response {
    let body = ErrorBody {
        error: label,
        message,
    };
    let bytes = serde_json::to_vec(&body).unwrap_or_else(|_| {
        br#"{"error":"Internal server error","message":"An error occurred"}"#.to_vec()
    });

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(bytes))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
