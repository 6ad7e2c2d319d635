// src/logger.rs
//! Colored terminal logging with a module prefix.
//!
//! `log!` always prints, `debug!` only with `--verbose`, and `warn!` goes to
//! stderr. Usage: `log!("loader"; "loaded {} entries", count)`.

use colored::Colorize;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Enable or disable debug-level output for the whole run.
pub fn init(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

#[must_use]
pub fn verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

pub fn log(module: &str, msg: &str) {
    println!("{} {msg}", format!("[{module}]").cyan().bold());
}

pub fn debug(module: &str, msg: &str) {
    if verbose() {
        println!("{} {msg}", format!("[{module}]").dimmed());
    }
}

pub fn warn(module: &str, msg: &str) {
    eprintln!("{} {msg}", format!("[{module}]").yellow().bold());
}

/// Log a message with a colored module prefix.
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a message only when verbose output is enabled.
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::debug($module, &format!($($arg)*))
    }};
}

/// Log a warning to stderr.
#[macro_export]
macro_rules! warn {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::warn($module, &format!($($arg)*))
    }};
}
