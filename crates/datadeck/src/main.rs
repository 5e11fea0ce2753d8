use datadeck::routes::{AppState, router};
use datadeck_core::{DataError, DatasetMeta, Document, PageResolver, ServiceConfigStore};
use datadeck_store_memory::MemoryStore;
use log::info;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<(), DataError> {
    env_logger::init();

    let config = ServiceConfigStore::new()?.load()?;
    info!(
        "starting datadeck on {} (page size {}, timeout {}ms)",
        config.listen_addr, config.page_size, config.query_timeout_ms
    );

    let store = seed_demo_store();
    let state = AppState {
        store: Arc::new(store),
        resolver: PageResolver::new(Duration::from_millis(config.query_timeout_ms)),
        page_size: config.page_size,
    };

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(DataError::IoError)?;

    axum::serve(listener, router(state))
        .await
        .map_err(DataError::IoError)?;

    Ok(())
}

/// Demo content until the hosted data service is wired in.
fn seed_demo_store() -> MemoryStore {
    let store = MemoryStore::new();

    let meta = DatasetMeta {
        id: Uuid::new_v4().to_string(),
        name: "demo".into(),
        owner: "alice".into(),
        owner_display_name: "Alice".into(),
    };
    info!("seeded demo dataset at /datasets/{}", meta.id);

    store.add_documents((0..30).map(|index| {
        Document::new(
            Uuid::new_v4().to_string(),
            meta.name.clone(),
            meta.owner.clone(),
            format!("Demo document {index}: paginated dataset preview content."),
        )
        .with_metadata("index", serde_json::json!(index))
    }));
    store.add_dataset(meta);

    store
}
