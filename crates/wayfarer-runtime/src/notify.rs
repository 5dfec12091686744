//! User-facing notifications

/// Alert for a blank search
pub const EMPTY_QUERY_ALERT: &str = "Please enter a search term";
/// Alert when the catalogue cannot be loaded
pub const LOAD_ERROR_ALERT: &str = "Error loading travel recommendations. Please try again.";

pub const SEARCHING_STATUS: &str = "Searching...";
pub const LOAD_ERROR_STATUS: &str = "Error loading data";
pub const CLEARED_STATUS: &str = "Results cleared";

/// Surface for messages aimed at the user
pub trait Notifier: Send + Sync {
    /// Transient status line
    fn status(&self, message: &str);

    /// Blocking notification the user must acknowledge
    fn alert(&self, message: &str);
}

/// Notifier that only writes to the log
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn status(&self, message: &str) {
        tracing::info!(status = %message);
    }

    fn alert(&self, message: &str) {
        tracing::warn!(alert = %message);
    }
}
