// responses/json.rs
use crate::domain::PropertyRecord;
use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use serde::Serialize;

/// Serialize `payload` into a JSON response with the given status.
pub fn json_response<T: Serialize + ?Sized>(status: u16, payload: &T) -> ResultResp {
    let body = serde_json::to_vec(payload)
        .map_err(|e| ServerError::Internal(format!("Failed to serialize response: {e}")))?;

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .map_err(|e| ServerError::Internal(e.to_string()))
}

/// `{ count, properties }`, optionally labelled with the lookup that
/// produced it (`city`, `state` or `type`).
#[derive(Debug, Serialize)]
pub struct PropertyList<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<&'a str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'a str>,
    pub count: usize,
    pub properties: Vec<&'a PropertyRecord>,
}

impl<'a> PropertyList<'a> {
    pub fn new(properties: Vec<&'a PropertyRecord>) -> Self {
        Self {
            city: None,
            state: None,
            kind: None,
            count: properties.len(),
            properties,
        }
    }
}
