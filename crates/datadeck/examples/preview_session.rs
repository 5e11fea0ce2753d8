//! Headless walkthrough of one preview session: resolve a page, expand a
//! row, copy an identifier. Run with `RUST_LOG=info`.

use datadeck::sinks::{LogClipboard, LogNotifier};
use datadeck::table::DataTable;
use datadeck_core::{DataError, DatasetMeta, Document, PageRequest, PageResolver};
use datadeck_store_memory::MemoryStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), DataError> {
    env_logger::init();

    let store = MemoryStore::new();
    store.add_dataset(DatasetMeta {
        id: "demo-id".into(),
        name: "demo".into(),
        owner: "alice".into(),
        owner_display_name: "Alice".into(),
    });
    store.add_documents((0..30).map(|index| {
        Document::new(
            format!("doc-{index:04}"),
            "demo",
            "alice",
            format!("Document {index} body. {}", "lorem ipsum ".repeat(12)),
        )
    }));

    let resolver = PageResolver::default();
    let page = resolver
        .resolve_page(&store, "demo-id", PageRequest::new(1))
        .await?;

    let mut table = DataTable::new(page);
    table.activate_row("doc-0026");
    table.copy_document_id("doc-0026", &LogClipboard, &LogNotifier);

    for row in table.rows() {
        if let Some(full) = &row.full_data {
            println!("{} | {}", row.short_id, full);
        } else {
            println!("{} | {}", row.short_id, row.preview);
        }
    }
    let controls = table.controls();
    println!(
        "{} (prev: {}, next: {})",
        controls.range_label, controls.prev_enabled, controls.next_enabled
    );

    Ok(())
}
