pub mod routes;
pub mod sinks;
pub mod table;

pub use routes::{AppState, DatasetPageView, router};
pub use table::{DataTable, RowView, TableControls};
