use async_trait::async_trait;
use datadeck_core::{
    DataError, DatasetMeta, DatasetStore, Document, DocumentSlice, PageWindow,
};
use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct MemoryState {
    metas: RwLock<HashMap<String, DatasetMeta>>,

    /// All documents in insertion order; range queries index into the
    /// per-dataset filtered view of this list.
    documents: RwLock<Vec<Document>>,
}

/// In-memory reference implementation of `DatasetStore`.
///
/// Documents keep insertion order, which is the storage order pagination
/// windows index into. Cloning shares the underlying storage.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dataset(&self, meta: DatasetMeta) {
        rwlock_write(&self.state.metas).insert(meta.id.clone(), meta);
    }

    pub fn add_document(&self, document: Document) {
        rwlock_write(&self.state.documents).push(document);
    }

    pub fn add_documents(&self, documents: impl IntoIterator<Item = Document>) {
        rwlock_write(&self.state.documents).extend(documents);
    }

    pub fn dataset_count(&self) -> usize {
        rwlock_read(&self.state.metas).len()
    }

    pub fn document_count(&self) -> usize {
        rwlock_read(&self.state.documents).len()
    }
}

#[async_trait]
impl DatasetStore for MemoryStore {
    async fn dataset_meta(&self, dataset_id: &str) -> Result<DatasetMeta, DataError> {
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
        let documents = rwlock_read(&self.state.documents);

        let matching: Vec<&Document> = documents
            .iter()
            .filter(|d| d.dataset_name == dataset_name && d.owner == owner)
            .collect();

        // Sentinel: the query itself succeeded but nothing matches.
        if matching.is_empty() {
            return Err(DataError::NoContent);
        }

        let total = matching.len() as u64;
        let slice: Vec<Document> = matching
            .into_iter()
            .enumerate()
            .filter(|(index, _)| window.contains(*index as u64))
            .map(|(_, document)| document.clone())
            .collect();

        debug!(
            "range fetch {dataset_name}/{owner} rows {}..{}: {} of {total}",
            window.from,
            window.to,
            slice.len()
        );

        Ok(DocumentSlice {
            documents: slice,
            total,
        })
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

#[cfg(test)]
mod tests {
    use super::*;
    use datadeck_core::PageRequest;

    fn seeded(count: usize) -> MemoryStore {
        let store = MemoryStore::new();
        store.add_dataset(DatasetMeta {
            id: "demo-id".into(),
            name: "demo".into(),
            owner: "alice".into(),
            owner_display_name: "Alice".into(),
        });
        store.add_documents((0..count).map(|index| {
            Document::new(format!("doc-{index}"), "demo", "alice", format!("payload {index}"))
        }));
        store
    }

    #[tokio::test]
    async fn meta_lookup_by_id() {
        let store = seeded(1);
        let meta = store.dataset_meta("demo-id").await.unwrap();
        assert_eq!(meta.name, "demo");
        assert_eq!(meta.owner_display_name, "Alice");

        let err = store.dataset_meta("nope").await.unwrap_err();
        assert!(matches!(err, DataError::DatasetNotFound(_)));
    }

    #[tokio::test]
    async fn range_fetch_keeps_insertion_order() {
        let store = seeded(30);
        let slice = store
            .documents_in_range("demo", "alice", PageRequest::new(0).window())
            .await
            .unwrap();

        assert_eq!(slice.len(), 25);
        assert_eq!(slice.total, 30);
        assert_eq!(slice.documents[0].id, "doc-0");
        assert_eq!(slice.documents[24].id, "doc-24");
    }

    #[tokio::test]
    async fn count_ignores_the_window() {
        let store = seeded(30);
        let slice = store
            .documents_in_range("demo", "alice", PageRequest::new(1).window())
            .await
            .unwrap();

        assert_eq!(slice.len(), 5);
        assert_eq!(slice.total, 30);
        assert_eq!(slice.documents[0].id, "doc-25");
    }

    #[tokio::test]
    async fn empty_match_is_the_no_content_sentinel() {
        let store = seeded(3);
        let err = store
            .documents_in_range("demo", "mallory", PageRequest::new(0).window())
            .await
            .unwrap_err();
        assert!(matches!(err, DataError::NoContent));
    }

    #[tokio::test]
    async fn window_past_the_end_is_empty_but_not_sentinel() {
        let store = seeded(3);
        let slice = store
            .documents_in_range("demo", "alice", PageRequest::new(4).window())
            .await
            .unwrap();
        assert!(slice.is_empty());
        assert_eq!(slice.total, 3);
    }

    #[tokio::test]
    async fn documents_from_other_datasets_do_not_leak() {
        let store = seeded(2);
        store.add_document(Document::new("other-1", "other", "alice", "other payload"));

        let slice = store
            .documents_in_range("demo", "alice", PageRequest::new(0).window())
            .await
            .unwrap();
        assert_eq!(slice.total, 2);
        assert!(slice.documents.iter().all(|d| d.dataset_name == "demo"));
    }
}
