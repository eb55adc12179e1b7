/// System-level errors. Field validation failures are not errors in this
/// sense; they are returned as [`FieldErrors`](super::FieldErrors) data.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("unknown form field: {name}")]
    UnknownField { name: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
