//! RosterError → napi::Error, plus JSON encoding of outgoing values.

use roster_core::RosterError;
use serde::Serialize;

/// Convert a RosterError into a JS-visible error.
pub fn to_napi_error(err: RosterError) -> napi::Error {
    let status = match err {
        RosterError::UnknownField { .. } => napi::Status::InvalidArg,
        RosterError::SerializationError(_) => napi::Status::InvalidArg,
        RosterError::ConfigError(_) => napi::Status::GenericFailure,
    };
    napi::Error::new(status, err.to_string())
}

pub fn runtime_not_initialized() -> napi::Error {
    napi::Error::from_reason("RosterRuntime not initialized. Call roster_initialize() first.")
}

pub fn session_poisoned() -> napi::Error {
    napi::Error::from_reason("Roster session lock poisoned")
}

/// Serialize any outgoing value as JSON.
pub fn to_json<T: Serialize>(value: &T) -> napi::Result<serde_json::Value> {
    serde_json::to_value(value)
        .map_err(|e| to_napi_error(RosterError::SerializationError(e)))
}
