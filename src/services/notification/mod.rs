// Notification service
// Seam for the external toast/notification collaborator

use anyhow::Result;
use notify_rust::{Notification, Timeout};

/// Outbound notification channel the presenter reports through.
///
/// The widget itself never renders toasts; whoever embeds it supplies an
/// implementation (or keeps the default desktop one).
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Report a successfully saved event.
    fn notify_success(&self, title: &str, body: &str) -> Result<()>;

    /// Report a non-fatal problem to the user.
    fn notify_error(&self, title: &str, body: &str) -> Result<()>;
}

/// Desktop notifier backed by the system notification daemon.
pub struct DesktopNotifier {
    enabled: bool,
}

impl DesktopNotifier {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if notifications are enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable notifications
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn show(&self, title: &str, body: &str, timeout_ms: u32) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        Notification::new()
            .summary(title)
            .body(body)
            .timeout(Timeout::Milliseconds(timeout_ms))
            .show()
            .map_err(|e| anyhow::anyhow!("Failed to show notification: {}", e))?;

        Ok(())
    }
}

impl Notifier for DesktopNotifier {
    fn notify_success(&self, title: &str, body: &str) -> Result<()> {
        self.show(title, body, 5000)
    }

    fn notify_error(&self, title: &str, body: &str) -> Result<()> {
        self.show(title, body, 10000)
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new(true)
    }
}
