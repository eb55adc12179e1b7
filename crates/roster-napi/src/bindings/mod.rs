//! All NAPI-exported functions, grouped by domain.

pub mod form;
pub mod lifecycle;
pub mod records;
