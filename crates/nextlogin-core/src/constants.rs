/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Fallback cadence when no usable gap exists.
pub const DEFAULT_INTERVAL_SECS: f64 = SECONDS_PER_DAY as f64;

/// Minimum history length each algorithm needs before it will predict.
pub const MIN_LOGINS_INTERVAL: usize = 2;
pub const MIN_LOGINS_PERIODICITY: usize = 3;
pub const MIN_LOGINS_DYNAMIC: usize = 5;

/// Reliability caps. No heuristic is ever fully trusted.
pub const INTERVAL_RELIABILITY_CAP: f64 = 0.85;
pub const PERIODICITY_RELIABILITY_CAP: f64 = 0.9;
pub const DYNAMIC_RELIABILITY_CAP: f64 = 0.95;

/// Output timestamp layout (`YYYY-MM-DDTHH:MM:SSZ`).
pub const ISO_UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
