// errors.rs
use astra::Response;
use thiserror::Error;

/// Errors a route handler can end with. Each one is rendered as a JSON
/// `{ error, message }` body by `responses::error_to_response`.
#[derive(Debug, Error)]
pub enum ServerError {
    /// `/api/properties/:id` with no record carrying that id.
    #[error("No property found with ID {0}")]
    PropertyNotFound(String),

    /// A category lookup matched nothing. The payload is the full message.
    #[error("{0}")]
    NoProperties(String),

    #[error("Cannot {method} {url}")]
    RouteNotFound { method: String, url: String },

    #[error("{0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::PropertyNotFound(_)
            | ServerError::NoProperties(_)
            | ServerError::RouteNotFound { .. } => 404,
            ServerError::Internal(_) => 500,
        }
    }

    /// Short label used as the `error` field of the response body.
    pub fn label(&self) -> &'static str {
        match self {
            ServerError::PropertyNotFound(_) => "Property not found",
            ServerError::NoProperties(_) => "No properties found",
            ServerError::RouteNotFound { .. } => "Route not found",
            ServerError::Internal(_) => "Internal server error",
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
