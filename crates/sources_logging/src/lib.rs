#![deny(missing_docs)]
//! Logging macros shared by the source gallery crates.
//!
//! Library code in `sources_core` and `sources_engine` only emits records
//! through `gallery_*!`; none of it installs a logger. The `source-gallery`
//! binary installs one from its RON config, sending terminal output to
//! stderr so stdout carries nothing but rendered HTML. Tests install the
//! stderr logger from [`initialize_for_tests`] instead.
//!
//! The macros expand to `log::*!` at the call site, so every caller depends
//! on `log` directly.

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! gallery_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! gallery_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! gallery_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! gallery_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! gallery_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Installs a stderr logger for tests: debug level in debug builds, info
/// otherwise.
///
/// Extraction and repository tests rely on it to surface the skipped-record
/// and store-failure warnings. Calling it again after a logger exists does
/// nothing, so every test may call it.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may already have installed the logger.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )]);
}
