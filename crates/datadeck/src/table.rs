use datadeck_core::{
    ClipboardSink, DatasetPage, NotificationLevel, NotificationSink, PreviewState, short_id,
    snippet,
};
use serde::Serialize;

/// One rendered table row.
///
/// Collapsed rows carry the truncated identifier and payload preview;
/// the expanded row additionally carries the full payload, rendered
/// directly below its source row.
#[derive(Debug, Clone, Serialize)]
pub struct RowView {
    /// Full document identifier, the text the copy gesture writes.
    pub id: String,

    /// Identifier cell text (first 10 characters).
    pub short_id: String,

    /// Payload preview (first 100 characters plus ellipsis).
    pub preview: String,

    pub expanded: bool,

    /// Full payload, present only for the expanded row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_data: Option<String>,
}

/// Pagination controls under the table.
#[derive(Debug, Clone, Serialize)]
pub struct TableControls {
    pub prev_enabled: bool,
    pub next_enabled: bool,

    /// Footer label, e.g. "25 - 50 of 61".
    pub range_label: String,
}

/// View state for one rendered dataset preview table.
///
/// Owns the resolved page plus the row-expansion state. One instance per
/// rendered view; expansion state is not persisted across page loads.
pub struct DataTable {
    page: DatasetPage,
    preview: PreviewState,
}

impl DataTable {
    pub fn new(page: DatasetPage) -> Self {
        Self {
            page,
            preview: PreviewState::default(),
        }
    }

    pub fn page(&self) -> &DatasetPage {
        &self.page
    }

    pub fn preview(&self) -> &PreviewState {
        &self.preview
    }

    /// Double-click gesture on the row holding `document_id`.
    ///
    /// Unknown ids are ignored so a stale gesture after a page swap
    /// cannot expand a row that is no longer rendered.
    pub fn activate_row(&mut self, document_id: &str) {
        if let Some(document) = self
            .page
            .result
            .documents
            .iter()
            .find(|d| d.id == document_id)
        {
            self.preview.activate(document);
        }
    }

    /// Single click on the identifier cell: copy the full identifier and
    /// confirm with a toast. Leaves expansion state alone.
    pub fn copy_document_id(
        &self,
        document_id: &str,
        clipboard: &dyn ClipboardSink,
        notifier: &dyn NotificationSink,
    ) {
        clipboard.write_text(document_id);
        notifier.notify(NotificationLevel::Success, "Copied to clipboard");
    }

    pub fn rows(&self) -> Vec<RowView> {
        self.page
            .result
            .documents
            .iter()
            .map(|document| {
                let expanded = self.preview.is_expanded(&document.id);
                RowView {
                    id: document.id.clone(),
                    short_id: short_id(document).to_string(),
                    preview: snippet(document),
                    expanded,
                    full_data: expanded.then(|| document.data.clone()),
                }
            })
            .collect()
    }

    pub fn controls(&self) -> TableControls {
        TableControls {
            prev_enabled: self.page.result.has_prev(),
            next_enabled: self.page.result.has_next(),
            range_label: self.page.result.display_range(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datadeck_core::{DatasetMeta, Document, NotificationLevel, PageResult};
    use datadeck_test_support::{RecordingClipboard, RecordingNotifier};

    fn table_with(count: usize, page: u64, total: u64) -> DataTable {
        let documents: Vec<Document> = (0..count)
            .map(|index| {
                Document::new(
                    format!("document-{index:04}"),
                    "demo",
                    "alice",
                    format!("payload {index} {}", "x".repeat(120)),
                )
            })
            .collect();

        DataTable::new(DatasetPage {
            meta: DatasetMeta {
                id: "demo-id".into(),
                name: "demo".into(),
                owner: "alice".into(),
                owner_display_name: "Alice".into(),
            },
            result: PageResult {
                documents,
                count: total,
                page,
                size: 25,
            },
        })
    }

    #[test]
    fn double_click_expands_then_collapses() {
        let mut table = table_with(3, 0, 3);

        table.activate_row("document-0001");
        let rows = table.rows();
        assert!(rows[1].expanded);
        assert!(rows[1].full_data.is_some());
        assert!(!rows[0].expanded);

        table.activate_row("document-0001");
        assert!(table.rows().iter().all(|r| !r.expanded));
    }

    #[test]
    fn only_one_row_expanded_at_a_time() {
        let mut table = table_with(3, 0, 3);

        table.activate_row("document-0000");
        table.activate_row("document-0002");

        let rows = table.rows();
        assert!(!rows[0].expanded);
        assert!(rows[2].expanded);
    }

    #[test]
    fn unknown_row_gesture_is_ignored() {
        let mut table = table_with(2, 0, 2);
        table.activate_row("document-9999");
        assert!(table.rows().iter().all(|r| !r.expanded));
    }

    #[test]
    fn collapsed_rows_are_truncated() {
        let table = table_with(1, 0, 1);
        let rows = table.rows();

        assert_eq!(rows[0].short_id, "document-0");
        assert_eq!(rows[0].preview.chars().count(), 101);
        assert!(rows[0].preview.ends_with('…'));
        assert!(rows[0].full_data.is_none());
    }

    #[test]
    fn copy_writes_full_id_and_toasts() {
        let table = table_with(1, 0, 1);
        let clipboard = RecordingClipboard::new();
        let notifier = RecordingNotifier::new();

        table.copy_document_id("document-0000", &clipboard, &notifier);

        assert_eq!(clipboard.writes(), vec!["document-0000".to_string()]);
        let toasts = notifier.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].0, NotificationLevel::Success);

        // copying must not touch expansion state
        assert!(table.rows().iter().all(|r| !r.expanded));
    }

    #[test]
    fn controls_follow_page_position() {
        let first = table_with(25, 0, 30);
        assert!(!first.controls().prev_enabled);
        assert!(first.controls().next_enabled);

        let last = table_with(5, 1, 30);
        let controls = last.controls();
        assert!(controls.prev_enabled);
        assert!(!controls.next_enabled);
        assert_eq!(controls.range_label, "25 - 50 of 30");
    }
}
