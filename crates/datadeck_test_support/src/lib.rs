pub mod fake_store;
pub mod fixtures;
pub mod sinks;

pub use fake_store::{FakeStore, FakeStoreOutcome, FakeStoreStats};
pub use sinks::{RecordingClipboard, RecordingNotifier};
