/// Severity of a transient user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// Transient toast channel.
///
/// Injected wherever user feedback is emitted instead of going through a
/// process-wide dispatcher. Best-effort: implementations must not fail
/// the calling operation.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, level: NotificationLevel, message: &str);
}

/// System clipboard access.
///
/// Fire-and-forget; there is no success contract beyond best effort.
pub trait ClipboardSink: Send + Sync {
    fn write_text(&self, text: &str);
}
