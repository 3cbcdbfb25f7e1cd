#![deny(missing_docs)]
//! Shared logging utilities for the taskdeck workspace.
//!
//! This crate provides the `deck_*` logging macros used across the codebase,
//! a per-thread counter of driver turns that the macros stamp onto every
//! record, and a minimal test initializer for the global logger.

use std::cell::Cell;

thread_local! {
    /// Thread-local storage for the current driver turn.
    static TURN: Cell<u64> = const { Cell::new(0) };
}

/// Sets the driver turn for the current thread.
/// The driver loop calls this once per processed message.
pub fn set_turn(turn: u64) {
    TURN.with(|v| v.set(turn));
}

/// Retrieves the driver turn for the current thread.
/// Returns 0 on threads that never set one (engine workers, tests).
pub fn current_turn() -> u64 {
    TURN.with(|v| v.get())
}

/// Logs a trace-level message tagged with the current turn.
#[macro_export]
macro_rules! deck_trace {
    ($($arg:tt)*) => {{
        log::trace!("[t{}] {}", $crate::current_turn(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message tagged with the current turn.
#[macro_export]
macro_rules! deck_info {
    ($($arg:tt)*) => {{
        log::info!("[t{}] {}", $crate::current_turn(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message tagged with the current turn.
#[macro_export]
macro_rules! deck_debug {
    ($($arg:tt)*) => {{
        log::debug!("[t{}] {}", $crate::current_turn(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message tagged with the current turn.
#[macro_export]
macro_rules! deck_warn {
    ($($arg:tt)*) => {{
        log::warn!("[t{}] {}", $crate::current_turn(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message tagged with the current turn.
#[macro_export]
macro_rules! deck_error {
    ($($arg:tt)*) => {{
        log::error!("[t{}] {}", $crate::current_turn(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
