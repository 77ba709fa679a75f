//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro that only prints with `--verbose`
//!
//! Output goes to stderr so that `docsite resolve` can pipe JSON on stdout.
//!
//! # Example
//!
//! ```ignore
//! log!("check"; "resolved {} routes", count);
//! debug!("config"; "loaded {}", path.display());
//! ```

use owo_colors::{OwoColorize, Stream, Style};
use std::{
    fmt,
    io::{Write, stderr},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);
    let mut stderr = stderr().lock();
    writeln!(stderr, "{prefix} {message}").ok();
    stderr.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str) -> String {
    let prefix = format!("[{module}]");
    let style = match module.to_ascii_lowercase().as_str() {
        "error" => Style::new().bright_red().bold(),
        "check" | "ok" => Style::new().bright_green().bold(),
        "routes" | "config" => Style::new().bright_blue().bold(),
        _ => Style::new().bright_yellow().bold(),
    };
    paint(&prefix, Stream::Stderr, style)
}

/// Style text for `stream`, honoring `--color` and TTY detection.
pub fn paint(text: impl fmt::Display, stream: Stream, style: Style) -> String {
    text.if_supports_color(stream, |t| t.style(style)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_toggle() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }

    #[test]
    fn test_prefix_honors_color_override() {
        owo_colors::set_override(false);
        assert_eq!(colorize_prefix("check"), "[check]");
        assert_eq!(colorize_prefix("warning"), "[warning]");
    }
}
