//! # roster-observability
//!
//! Tracing subscriber setup and the structured log events emitted by the
//! session layer.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_with_config, init_tracing_with_filter};
