//! Lifecycle bindings: initialize, status.

use napi_derive::napi;

use crate::runtime::{self, RuntimeOptions};

/// Initialize the Roster runtime.
///
/// Must be called before any other Roster function.
/// `config_toml`: optional TOML configuration string.
#[napi]
pub fn roster_initialize(config_toml: Option<String>) -> napi::Result<()> {
    runtime::initialize(RuntimeOptions { config_toml })
}

/// Whether `roster_initialize` has succeeded.
#[napi]
pub fn roster_is_initialized() -> bool {
    runtime::is_initialized()
}
