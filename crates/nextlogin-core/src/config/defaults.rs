// Single source of truth for all default values.

// --- Prediction ---
pub const DEFAULT_MAX_INTERVAL_GAP_DAYS: u32 = 30;
pub const DEFAULT_INTERVAL_RECENT_SAMPLES: usize = 5;
pub const DEFAULT_DYNAMIC_RECENT_WINDOW: usize = 10;
pub const DEFAULT_PARALLEL: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_FORMAT: &str = "text";
