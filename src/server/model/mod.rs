use serde::Serialize;

pub(crate) mod config;
pub(crate) mod order;

/// Informational payload, e.g. `{"message": "..."}`
#[derive(Debug, Serialize)]
pub(crate) struct MessageResponse {
    pub message: String,
}

/// Error payload, e.g. `{"ERROR": "..."}`
#[derive(Debug, Serialize)]
pub(crate) struct ErrorResponse {
    #[serde(rename = "ERROR")]
    pub error: String,
}
