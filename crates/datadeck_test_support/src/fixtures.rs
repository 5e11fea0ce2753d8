use datadeck_core::{DatasetMeta, Document, DocumentSlice};

pub fn meta(
    id: impl Into<String>,
    name: impl Into<String>,
    owner: impl Into<String>,
) -> DatasetMeta {
    let owner = owner.into();
    DatasetMeta {
        id: id.into(),
        name: name.into(),
        owner_display_name: owner.clone(),
        owner,
    }
}

/// `count` documents with predictable ids (`doc-0`, `doc-1`, ...).
pub fn numbered_documents(
    dataset_name: &str,
    owner: &str,
    count: usize,
) -> Vec<Document> {
    (0..count)
        .map(|index| {
            Document::new(
                format!("doc-{index}"),
                dataset_name,
                owner,
                format!("payload for document {index}"),
            )
        })
        .collect()
}

pub fn slice_of(documents: Vec<Document>) -> DocumentSlice {
    DocumentSlice {
        total: documents.len() as u64,
        documents,
    }
}
