use crate::{DataError, DatasetMeta, DatasetStore, PageRequest, PageResult};
use log::{debug, warn};
use std::future::Future;
use std::time::Duration;

/// Default per-call budget for store requests.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_millis(5000);

/// One resolved dataset page: metadata plus the document window.
#[derive(Debug, Clone)]
pub struct DatasetPage {
    pub meta: DatasetMeta,
    pub result: PageResult,
}

/// Resolves pages by issuing the two sequential store reads.
///
/// Stateless between calls: there is no caching of previously fetched
/// pages and no retrying of failed lookups. Each navigation is a fresh
/// metadata-then-rows pair.
#[derive(Debug, Clone)]
pub struct PageResolver {
    /// Budget applied to each store call separately, so a slow metadata
    /// lookup cannot starve the row fetch.
    timeout: Duration,
}

impl Default for PageResolver {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_STORE_TIMEOUT,
        }
    }
}

impl PageResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Resolve `request` against `store` for the dataset behind
    /// `dataset_id`.
    ///
    /// The metadata lookup must complete first since the row fetch is
    /// keyed by the resolved name/owner pair. `DatasetNotFound` aborts
    /// before any row fetch is attempted. A `NoContent` reply from the
    /// row fetch resolves to a valid empty page.
    pub async fn resolve_page(
        &self,
        store: &dyn DatasetStore,
        dataset_id: &str,
        request: PageRequest,
    ) -> Result<DatasetPage, DataError> {
        let window = request.window();
        debug!(
            "resolving page {} of dataset {dataset_id} (rows {}..{})",
            request.page, window.from, window.to
        );

        let meta = self.bounded(store.dataset_meta(dataset_id)).await?;

        let result = match self
            .bounded(store.documents_in_range(&meta.name, &meta.owner, window))
            .await
        {
            Ok(slice) => PageResult {
                documents: slice.documents,
                count: slice.total,
                page: request.page,
                size: request.size,
            },
            Err(DataError::NoContent) => {
                debug!("dataset {} has no rows in range, serving empty page", meta.name);
                PageResult::empty(&request)
            }
            Err(err) => {
                warn!("document fetch failed for dataset {}: {err}", meta.name);
                return Err(err);
            }
        };

        Ok(DatasetPage { meta, result })
    }

    async fn bounded<T>(
        &self,
        call: impl Future<Output = Result<T, DataError>>,
    ) -> Result<T, DataError> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(outcome) => outcome,
            Err(_) => Err(DataError::Timeout),
        }
    }
}
