//! Terminal interaction for the creation workflow
//!
//! Prompts are built on dialoguer with a custom theme; the calendar
//! popover uses crossterm raw-mode key handling. A global Ctrl+C flag
//! lets long prompt sequences cancel cleanly.

use std::sync::atomic::{AtomicBool, Ordering};

pub mod calendar;
pub mod form;
mod theme;

pub use theme::BoardTheme;

/// Global flag to track if Ctrl+C was pressed
static CANCELLED: AtomicBool = AtomicBool::new(false);

/// Check if cancellation was requested
pub fn is_cancelled() -> bool {
    CANCELLED.load(Ordering::SeqCst)
}

/// Mark the session as cancelled
pub fn request_cancel() {
    CANCELLED.store(true, Ordering::SeqCst);
}

/// Set up the global Ctrl+C handler
pub fn setup_ctrl_c_handler() {
    static HANDLER_SET: AtomicBool = AtomicBool::new(false);

    if HANDLER_SET.swap(true, Ordering::SeqCst) {
        return;
    }

    if let Err(e) = ctrlc::set_handler(move || {
        CANCELLED.store(true, Ordering::SeqCst);
        eprintln!();
    }) {
        eprintln!("Warning: Could not set Ctrl+C handler: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_flag_roundtrip() {
        assert!(!is_cancelled());
        request_cancel();
        assert!(is_cancelled());
        CANCELLED.store(false, Ordering::SeqCst);
    }
}
