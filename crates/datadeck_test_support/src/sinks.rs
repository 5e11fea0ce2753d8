use datadeck_core::{ClipboardSink, NotificationLevel, NotificationSink};
use std::sync::{Arc, Mutex, MutexGuard};

/// Clipboard sink that records every written text.
#[derive(Clone, Default)]
pub struct RecordingClipboard {
    writes: Arc<Mutex<Vec<String>>>,
}

impl RecordingClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<String> {
        lock(&self.writes).clone()
    }
}

impl ClipboardSink for RecordingClipboard {
    fn write_text(&self, text: &str) {
        lock(&self.writes).push(text.to_string());
    }
}

/// Notification sink that records every emitted toast.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    toasts: Arc<Mutex<Vec<(NotificationLevel, String)>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<(NotificationLevel, String)> {
        lock(&self.toasts).clone()
    }
}

impl NotificationSink for RecordingNotifier {
    fn notify(&self, level: NotificationLevel, message: &str) {
        lock(&self.toasts).push((level, message.to_string()));
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poison_error) => poison_error.into_inner(),
    }
}
