use crate::{DataError, DatasetMeta, DocumentSlice, PageWindow};
use async_trait::async_trait;

/// Read-only access to the hosted dataset service.
///
/// The page resolver talks exclusively through this trait, never to the
/// service's wire format. Implementations must be thread-safe for use
/// behind shared service state.
#[async_trait]
pub trait DatasetStore: Send + Sync {
    /// Resolve dataset metadata from its opaque identifier.
    ///
    /// Exact-match, single-row lookup. Returns `DataError::DatasetNotFound`
    /// when no dataset matches; that failure is fatal for the page load.
    async fn dataset_meta(&self, dataset_id: &str) -> Result<DatasetMeta, DataError>;

    /// Fetch documents for a dataset/owner pair inside `window`, plus the
    /// total matching row count computed independently of the window.
    ///
    /// A store may report "query succeeded, zero matching rows" with the
    /// `DataError::NoContent` sentinel; callers treat it as an empty page,
    /// never as a failure.
    async fn documents_in_range(
        &self,
        dataset_name: &str,
        owner: &str,
        window: PageWindow,
    ) -> Result<DocumentSlice, DataError>;
}
