// Single source of truth for all default values.

// --- Ids ---
pub const DEFAULT_ID_PREFIX: &str = "UID";
pub const DEFAULT_RANDOM_ID_UPPER_BOUND: u32 = 10_000; // exclusive

// --- Validation ---
pub const DEFAULT_MOBILE_MIN_DIGITS: usize = 7;
pub const DEFAULT_MOBILE_MAX_DIGITS: usize = 15;
pub const DEFAULT_MIN_PAYMENT_LIMIT: f64 = 0.0;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
