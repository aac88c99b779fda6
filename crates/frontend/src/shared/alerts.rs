//! User-facing failure reporting.
//!
//! Network failures are logged for diagnostics and surfaced as a browser
//! alert; the caller decides what UI transition to abort. No retries.

/// Log a failure and show it to the user.
///
/// `message` is the user-facing text (page locale), `detail` the raw error.
pub fn report_error(message: &str, detail: &str) {
    log::error!("{}: {}", message, detail);
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(&format!("{}: {}", message, detail));
    }
}
