//! Capabilities the panel needs from its host UI.
//!
//! Injected explicitly so the panel logic can be exercised without an
//! ambient modal or router context.

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Dispatches user-facing notifications (toast, modal, status bar).
pub trait Notifier: Send + Sync {
    fn notify(&self, level: NoticeLevel, message: &str);
}

/// Routes the user to another screen.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}
