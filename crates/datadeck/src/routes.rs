use crate::table::{DataTable, RowView, TableControls};
use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use datadeck_core::{DataError, DatasetStore, PageRequest, PageResolver};
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared state behind the page route.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DatasetStore>,
    pub resolver: PageResolver,
    pub page_size: u32,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/datasets/{id}", get(dataset_page))
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: u64,
}

/// JSON page model served to the dashboard front end.
///
/// Layout, styling and the chat playground are the front end's business;
/// this is the full data contract for one rendered preview table.
#[derive(Debug, Serialize)]
pub struct DatasetPageView {
    pub dataset_id: String,
    pub dataset_name: String,
    pub owner_display_name: String,
    pub page: u64,
    pub count: u64,
    pub rows: Vec<RowView>,
    pub controls: TableControls,
}

impl DatasetPageView {
    pub fn from_table(table: &DataTable) -> Self {
        let page = table.page();
        Self {
            dataset_id: page.meta.id.clone(),
            dataset_name: page.meta.name.clone(),
            owner_display_name: page.meta.owner_display_name.clone(),
            page: page.result.page,
            count: page.result.count,
            rows: table.rows(),
            controls: table.controls(),
        }
    }
}

async fn dataset_page(
    State(state): State<AppState>,
    Path(dataset_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<DatasetPageView>, StatusCode> {
    let request = PageRequest::new(query.page).with_size(state.page_size);

    let page = state
        .resolver
        .resolve_page(state.store.as_ref(), &dataset_id, request)
        .await
        .map_err(|err| error_status(&dataset_id, err))?;

    info!(
        "served page {} of dataset {} ({} rows, {} total)",
        page.result.page,
        page.meta.name,
        page.result.documents.len(),
        page.result.count
    );

    let table = DataTable::new(page);
    Ok(Json(DatasetPageView::from_table(&table)))
}

fn error_status(dataset_id: &str, err: DataError) -> StatusCode {
    match err {
        DataError::DatasetNotFound(_) => {
            info!("dataset {dataset_id} not found");
            StatusCode::NOT_FOUND
        }
        DataError::Timeout => {
            error!("store timed out while loading dataset {dataset_id}");
            StatusCode::GATEWAY_TIMEOUT
        }
        err => {
            error!("page load failed for dataset {dataset_id}: {err}");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
