#![deny(missing_docs)]
//! Logging front door for the urlengthener crates.
//!
//! `urlengthener_core` logs session transitions (submit, reset, ignored
//! completions), `urlengthener_engine` logs request dispatch and transport
//! failures, and `urlengthener_app` logs start-up and shutdown. All of them
//! go through the `lengthen_*` macros below so the log calls read the same
//! everywhere and the facade can be swapped in one place.
//!
//! Only the `log` facade is touched here. The binary installs the real
//! `simplelog` backend (file, terminal or both); tests install a terminal
//! logger through [`initialize_for_tests`]. A crate using the macros needs
//! `log` in its own dependencies, since the expansion names it directly.

use log::LevelFilter;

/// Trace level: per-request detail that is too noisy for normal runs.
#[macro_export]
macro_rules! lengthen_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Debug level: request URLs, ignored duplicate submits.
#[macro_export]
macro_rules! lengthen_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Info level: session transitions and completed requests.
#[macro_export]
macro_rules! lengthen_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Warn level: failed requests, stale completions, dropped UI output.
#[macro_export]
macro_rules! lengthen_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Error level: the engine could not run a request at all.
#[macro_export]
macro_rules! lengthen_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Level shared by the app logger and the test logger.
///
/// Debug builds include request URLs and ignored submits; release builds
/// stop at session transitions.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs a terminal logger for test binaries.
///
/// Test files call this once through a `std::sync::Once`. A second install
/// (another test file in the same binary, or the app logger) is ignored.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        default_level(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
