use log::LevelFilter;
use std::env;

/// environment variable that turns on debug output
pub const DEBUG_ENV_VAR: &str = "WORDBRAIN_DEBUG";

/// Initialize logging for the solver binaries.
///
/// `Info` by default, `Debug` when `debug_enabled`. An explicit `RUST_LOG`
/// overrides both.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // a second initialization (e.g. from a test harness) keeps the first logger
    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?} level");
    }
}

/// whether `DEBUG_ENV_VAR` is set
pub fn debug_requested() -> bool {
    env::var_os(DEBUG_ENV_VAR).is_some()
}
