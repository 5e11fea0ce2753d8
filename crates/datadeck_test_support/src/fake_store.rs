use async_trait::async_trait;
use datadeck_core::{
    DataError, DatasetMeta, DatasetStore, Document, DocumentSlice, PageWindow,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

/// Scripted outcome for a fake store call.
#[derive(Debug, Clone)]
pub enum FakeStoreOutcome {
    Slice(DocumentSlice),
    NoContent,
    Error(String),
    /// Never resolves inside the resolver's timeout budget.
    Hang,
}

impl FakeStoreOutcome {
    async fn into_result(self) -> Result<DocumentSlice, DataError> {
        match self {
            Self::Slice(slice) => Ok(slice),
            Self::NoContent => Err(DataError::NoContent),
            Self::Error(message) => Err(DataError::query_failed(message)),
            Self::Hang => {
                // Long enough to trip any sane test timeout budget.
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(DataError::Timeout)
            }
        }
    }
}

/// Counters for asserting on store traffic.
#[derive(Debug, Clone, Default)]
pub struct FakeStoreStats {
    pub meta_lookups: Vec<String>,
    pub range_fetches: Vec<(String, String, PageWindow)>,
}

#[derive(Default)]
struct FakeStoreState {
    metas: RwLock<HashMap<String, DatasetMeta>>,
    slices: RwLock<HashMap<String, FakeStoreOutcome>>,
    default_outcome: RwLock<Option<FakeStoreOutcome>>,
    meta_lookups: Mutex<Vec<String>>,
    range_fetches: Mutex<Vec<(String, String, PageWindow)>>,
}

/// In-memory `DatasetStore` with scripted replies per dataset name.
///
/// Builder-style seeding; clones share state so tests can keep a handle
/// for assertions after handing one to the code under test.
#[derive(Clone, Default)]
pub struct FakeStore {
    state: Arc<FakeStoreState>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_meta(self, meta: DatasetMeta) -> Self {
        rwlock_write(&self.state.metas).insert(meta.id.clone(), meta);
        self
    }

    /// Script the range-fetch reply for `dataset_name`.
    pub fn with_outcome(self, dataset_name: impl Into<String>, outcome: FakeStoreOutcome) -> Self {
        rwlock_write(&self.state.slices).insert(dataset_name.into(), outcome);
        self
    }

    pub fn with_slice(self, dataset_name: impl Into<String>, slice: DocumentSlice) -> Self {
        self.with_outcome(dataset_name, FakeStoreOutcome::Slice(slice))
    }

    pub fn with_default_outcome(self, outcome: FakeStoreOutcome) -> Self {
        *rwlock_write(&self.state.default_outcome) = Some(outcome);
        self
    }

    pub fn stats(&self) -> FakeStoreStats {
        FakeStoreStats {
            meta_lookups: mutex_lock(&self.state.meta_lookups).clone(),
            range_fetches: mutex_lock(&self.state.range_fetches).clone(),
        }
    }
}

#[async_trait]
impl DatasetStore for FakeStore {
    async fn dataset_meta(&self, dataset_id: &str) -> Result<DatasetMeta, DataError> {
        mutex_lock(&self.state.meta_lookups).push(dataset_id.to_string());

        rwlock_read(&self.state.metas)
            .get(dataset_id)
            .cloned()
            .ok_or_else(|| DataError::dataset_not_found(dataset_id))
    }

    async fn documents_in_range(
        &self,
        dataset_name: &str,
        owner: &str,
        window: PageWindow,
    ) -> Result<DocumentSlice, DataError> {
        mutex_lock(&self.state.range_fetches).push((
            dataset_name.to_string(),
            owner.to_string(),
            window,
        ));

        let outcome = rwlock_read(&self.state.slices)
            .get(dataset_name)
            .cloned()
            .or_else(|| rwlock_read(&self.state.default_outcome).clone());

        match outcome {
            Some(outcome) => {
                let slice = outcome.into_result().await?;
                let limit = window.limit() as usize;
                let documents: Vec<Document> = slice
                    .documents
                    .into_iter()
                    .enumerate()
                    .filter(|(index, _)| window.contains(*index as u64))
                    .map(|(_, document)| document)
                    .take(limit)
                    .collect();
                Ok(DocumentSlice {
                    documents,
                    total: slice.total,
                })
            }
            None => Err(DataError::NoContent),
        }
    }
}

fn rwlock_read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    match lock.read() {
        Ok(guard) => guard,
        Err(poison_error) => poison_error.into_inner(),
    }
}

fn rwlock_write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    match lock.write() {
        Ok(guard) => guard,
        Err(poison_error) => poison_error.into_inner(),
    }
}

fn mutex_lock<T>(lock: &Mutex<T>) -> MutexGuard<'_, T> {
    match lock.lock() {
        Ok(guard) => guard,
        Err(poison_error) => poison_error.into_inner(),
    }
}
