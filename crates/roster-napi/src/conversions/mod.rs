//! Conversions between Rust values and what crosses the NAPI boundary.

pub mod error_types;
