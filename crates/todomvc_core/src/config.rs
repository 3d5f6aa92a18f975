//! Startup configuration and fixed input constants.

/// Slot holding the serialized task list.
pub const DEFAULT_STORAGE_SLOT: &str = "todos-jquery";
/// Route applied when the page loads without a fragment.
pub const DEFAULT_ROUTE: &str = "/all";

/// Key code for Enter.
pub const ENTER_KEY: u32 = 13;
/// Key code for Escape.
pub const ESCAPE_KEY: u32 = 27;

/// Host-level settings, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Store slot for the task list.
    pub storage_slot: String,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Route used when the current URL carries none.
    pub initial_route: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_slot: DEFAULT_STORAGE_SLOT.to_string(),
            log_level: default_log_level().to_string(),
            initial_route: DEFAULT_ROUTE.to_string(),
        }
    }
}

/// Returns the default log level for the current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}
