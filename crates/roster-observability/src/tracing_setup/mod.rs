//! Tracing setup — structured logging with event definitions.

pub mod events;

use std::sync::Once;

use roster_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the filter directives.
pub const LOG_ENV_VAR: &str = "ROSTER_LOG";

static INIT: Once = Once::new();

/// Initialize the tracing subscriber with default configuration.
///
/// Respects `ROSTER_LOG`. Defaults to `info` if not set.
pub fn init_tracing() {
    init_tracing_with_config(&ObservabilityConfig::default());
}

/// Initialize from configuration. `ROSTER_LOG` wins over `log_level`.
///
/// Idempotent: only the first call in a process installs a subscriber. A
/// subscriber installed elsewhere first is left in place.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json_logs);
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), false);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        let result = if json {
            registry
                .with(fmt::layer().json().with_target(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };
        if result.is_err() {
            tracing::debug!("global subscriber already set, keeping it");
        }
    });
}
