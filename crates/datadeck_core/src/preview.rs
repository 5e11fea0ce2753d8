use crate::Document;

/// Number of identifier characters shown in a collapsed row.
pub const ID_PREVIEW_CHARS: usize = 10;

/// Number of payload characters shown in a collapsed row.
pub const DATA_PREVIEW_CHARS: usize = 100;

/// Expansion state of the preview table: at most one row expanded.
///
/// Lives in one rendered view instance, never persisted. A full page
/// reload starts over at `Collapsed`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PreviewState {
    #[default]
    Collapsed,
    Expanded(String),
}

impl PreviewState {
    /// Row-activation gesture (double click) for `document`.
    ///
    /// Activating the expanded row collapses it; activating any other row
    /// moves the expansion there.
    pub fn activate(&mut self, document: &Document) {
        *self = match self {
            Self::Expanded(id) if *id == document.id => Self::Collapsed,
            _ => Self::Expanded(document.id.clone()),
        };
    }

    pub fn expanded_id(&self) -> Option<&str> {
        match self {
            Self::Collapsed => None,
            Self::Expanded(id) => Some(id),
        }
    }

    pub fn is_expanded(&self, document_id: &str) -> bool {
        self.expanded_id() == Some(document_id)
    }
}

/// Truncate to a character count without splitting a code point.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Identifier cell text for a collapsed row.
pub fn short_id(document: &Document) -> &str {
    truncate_chars(&document.id, ID_PREVIEW_CHARS)
}

/// Payload preview for a collapsed row.
///
/// The ellipsis is appended unconditionally, matching the table's
/// rendering even for payloads shorter than the preview width.
pub fn snippet(document: &Document) -> String {
    format!("{}…", truncate_chars(&document.data, DATA_PREVIEW_CHARS))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, data: &str) -> Document {
        Document::new(id, "demo", "alice", data)
    }

    #[test]
    fn activate_toggles_same_row() {
        let d = doc("doc-1", "hello");
        let mut state = PreviewState::default();

        state.activate(&d);
        assert!(state.is_expanded("doc-1"));

        state.activate(&d);
        assert_eq!(state, PreviewState::Collapsed);
    }

    #[test]
    fn activate_moves_expansion_between_rows() {
        let a = doc("doc-a", "a");
        let b = doc("doc-b", "b");
        let mut state = PreviewState::default();

        state.activate(&a);
        state.activate(&b);

        assert!(state.is_expanded("doc-b"));
        assert!(!state.is_expanded("doc-a"));
    }

    #[test]
    fn short_id_keeps_first_ten_chars() {
        let d = doc("0123456789abcdef", "x");
        assert_eq!(short_id(&d), "0123456789");

        let short = doc("abc", "x");
        assert_eq!(short_id(&short), "abc");
    }

    #[test]
    fn snippet_always_carries_ellipsis() {
        let long = doc("d", &"x".repeat(150));
        let s = snippet(&long);
        assert_eq!(s.chars().count(), DATA_PREVIEW_CHARS + 1);
        assert!(s.ends_with('…'));

        assert_eq!(snippet(&doc("d", "short")), "short…");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let multibyte = doc("日本語のドキュメント識別子です", &"é".repeat(120));
        assert_eq!(short_id(&multibyte).chars().count(), ID_PREVIEW_CHARS);
        assert_eq!(
            snippet(&multibyte).chars().count(),
            DATA_PREVIEW_CHARS + 1
        );
    }
}
