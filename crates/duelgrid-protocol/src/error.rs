//! Error types for the protocol layer.

/// Errors that can occur in the protocol layer.
///
/// Both variants live behind the `json` feature because the only protocol
/// operations that can fail are codec operations; identity and control
/// types are infallible to construct.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed (turning a bundle into bytes).
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed (turning bytes back into a bundle).
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),
}
