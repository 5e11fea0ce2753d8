use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Sentinel status: the query succeeded but matched zero rows.
    ///
    /// Never surfaced past the page resolver, which maps it to a valid
    /// empty page. Only store implementations should construct it.
    #[error("No content")]
    NoContent,

    #[error("Store request timed out")]
    Timeout,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DataError {
    pub fn dataset_not_found(id: impl Into<String>) -> Self {
        Self::DatasetNotFound(id.into())
    }

    pub fn query_failed(message: impl Into<String>) -> Self {
        Self::QueryFailed(message.into())
    }
}
