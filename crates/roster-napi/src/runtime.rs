//! RosterRuntime — owns the form session for the lifetime of the page.
//!
//! The runtime is a singleton stored behind `OnceLock`. It's initialized once
//! via `initialize()` and accessed via `get()` for the lifetime of the process.

use std::sync::{Arc, Mutex, OnceLock};

use roster_core::RosterConfig;
use roster_session::RosterSession;
use tracing::info;

use crate::conversions::error_types;

/// Global singleton.
static RUNTIME: OnceLock<Arc<RosterRuntime>> = OnceLock::new();

/// The central runtime owning the session.
///
/// Every call runs to completion on the JS thread; the `Mutex` only exists
/// because the singleton is process-global.
pub struct RosterRuntime {
    pub session: Mutex<RosterSession>,
    pub config: RosterConfig,
}

/// Options for initializing the runtime.
#[derive(Default)]
pub struct RuntimeOptions {
    /// TOML configuration string. If None, uses defaults.
    pub config_toml: Option<String>,
}

impl RosterRuntime {
    fn new(opts: RuntimeOptions) -> roster_core::RosterResult<Self> {
        let config = match &opts.config_toml {
            Some(toml_str) => RosterConfig::from_toml(toml_str)?,
            None => RosterConfig::default(),
        };

        roster_observability::init_tracing_with_config(&config.observability);

        let session = RosterSession::new(&config);
        info!(session_id = %session.session_id(), "roster runtime initialized");

        Ok(Self {
            session: Mutex::new(session),
            config,
        })
    }
}

/// Initialize the global RosterRuntime singleton.
///
/// Returns an error if already initialized or if initialization fails.
pub fn initialize(opts: RuntimeOptions) -> napi::Result<()> {
    let runtime = RosterRuntime::new(opts).map_err(error_types::to_napi_error)?;
    RUNTIME
        .set(Arc::new(runtime))
        .map_err(|_| napi::Error::from_reason("RosterRuntime already initialized"))
}

/// Get a reference to the global RosterRuntime.
///
/// Returns an error if not yet initialized.
pub fn get() -> napi::Result<Arc<RosterRuntime>> {
    RUNTIME
        .get()
        .cloned()
        .ok_or_else(error_types::runtime_not_initialized)
}

/// Check if the runtime has been initialized.
pub fn is_initialized() -> bool {
    RUNTIME.get().is_some()
}

/// Run `f` against the session.
pub fn with_session<T>(f: impl FnOnce(&mut RosterSession) -> T) -> napi::Result<T> {
    let rt = get()?;
    let mut session = rt.session.lock().map_err(|_| error_types::session_poisoned())?;
    Ok(f(&mut session))
}
