use datadeck_core::{ClipboardSink, NotificationLevel, NotificationSink};
use log::{error, info};

/// Notification sink backed by the log facade.
///
/// Used where no real toast surface exists (headless demos, tooling).
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn notify(&self, level: NotificationLevel, message: &str) {
        match level {
            NotificationLevel::Error => error!("toast: {message}"),
            _ => info!("toast: {message}"),
        }
    }
}

/// Clipboard sink that only records the write in the log.
///
/// A headless process has no system clipboard; embedding UIs supply
/// their own `ClipboardSink`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogClipboard;

impl ClipboardSink for LogClipboard {
    fn write_text(&self, text: &str) {
        info!("clipboard: {} chars copied", text.chars().count());
    }
}
