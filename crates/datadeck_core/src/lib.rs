mod config;
mod dataset;
mod error;
mod notify;
mod page;
mod preview;
mod resolver;
mod traits;

pub use config::{ServiceConfig, ServiceConfigStore};
pub use dataset::{DatasetMeta, Document, DocumentSlice};
pub use error::DataError;
pub use notify::{ClipboardSink, NotificationLevel, NotificationSink};
pub use page::{DEFAULT_PAGE_SIZE, PageRequest, PageResult, PageWindow};
pub use preview::{DATA_PREVIEW_CHARS, ID_PREVIEW_CHARS, PreviewState, short_id, snippet};
pub use resolver::{DEFAULT_STORE_TIMEOUT, DatasetPage, PageResolver};
pub use traits::DatasetStore;
