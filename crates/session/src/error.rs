//! Error types for the session core.

use thiserror::Error;

/// Errors surfaced at the session core's JSON boundary.
///
/// In-process dispatch uses the closed [`crate::Action`] enum, so these only
/// arise when decoding `{type, payload}` envelopes handed over by external
/// collaborators.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The envelope named an action type outside the recognized protocol.
    /// This signals a caller defect and is never silently ignored.
    #[error("unrecognized action type: {0}")]
    UnknownAction(String),

    /// The envelope's payload does not deserialize into the action's
    /// expected shape.
    #[error("malformed action payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    /// The envelope is not an object carrying a string `type` field.
    #[error("action envelope is not an object with a string `type` field")]
    InvalidEnvelope,
}
