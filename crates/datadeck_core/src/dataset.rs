use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Metadata for one dataset, resolved from its opaque identifier.
///
/// Datasets are owned by the external data service; this crate only reads
/// them. The `(name, owner)` pair is unique and keys the document fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetMeta {
    /// Opaque dataset identifier (path segment in the page route).
    pub id: String,

    /// Dataset name, unique per owner.
    pub name: String,

    /// Opaque owner identifier.
    pub owner: String,

    /// Human-readable owner name for display.
    pub owner_display_name: String,
}

/// One retrievable unit of content belonging to a dataset/owner pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,

    /// Name of the dataset this document belongs to.
    pub dataset_name: String,

    /// Identifier of the owning user.
    pub owner: String,

    /// Opaque text payload.
    pub data: String,

    /// Open extension map for forward-compatible metadata.
    ///
    /// Insertion order is preserved so previews render fields in the
    /// order the service returned them.
    #[serde(default)]
    pub metadata: IndexMap<String, serde_json::Value>,
}

impl Document {
    pub fn new(
        id: impl Into<String>,
        dataset_name: impl Into<String>,
        owner: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            dataset_name: dataset_name.into(),
            owner: owner.into(),
            data: data.into(),
            metadata: IndexMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

/// Raw reply from a range-restricted document fetch.
#[derive(Debug, Clone, Default)]
pub struct DocumentSlice {
    /// Documents inside the requested window, in storage order.
    pub documents: Vec<Document>,

    /// Total matching rows for the dataset/owner pair, independent of
    /// the window restriction.
    pub total: u64,
}

impl DocumentSlice {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
