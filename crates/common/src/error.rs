//! Common error types.

use thiserror::Error;

/// Error raised at the boundary where protocol data is decoded into
/// client-side values.
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Unknown console message type: {0}")]
    UnknownMessageType(String),

    #[error("Handle is not a primitive: {0}")]
    NotAPrimitive(String),

    #[error("Unsupported unserializable value: {0}")]
    UnsupportedValue(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid event: {0}")]
    InvalidEvent(String),
}

pub type ProtocolResult<T> = Result<T, ProtocolError>;

impl ProtocolError {
    pub fn unknown_type(name: impl Into<String>) -> Self {
        Self::UnknownMessageType(name.into())
    }

    pub fn not_primitive(object_id: impl Into<String>) -> Self {
        Self::NotAPrimitive(object_id.into())
    }

    pub fn unsupported(value: impl Into<String>) -> Self {
        Self::UnsupportedValue(value.into())
    }

    pub fn invalid_event(msg: impl Into<String>) -> Self {
        Self::InvalidEvent(msg.into())
    }
}
