//! # roster-napi
//!
//! NAPI bindings for the TypeScript presentation layer.
//! Owns the `RosterRuntime` singleton holding the one form session.
//!
//! ## Architecture
//!
//! - `runtime.rs` — Global `RosterRuntime` singleton owning the session
//! - `bindings/` — NAPI functions grouped by lifecycle, form events, and list reads
//! - `conversions/` — Rust ↔ JS error and value conversions via serde_json

pub mod bindings;
pub mod conversions;
pub mod runtime;
