use crate::Document;
use serde::{Deserialize, Serialize};

/// Page size used by both the table view and the resolver.
///
/// The hosted service historically had a second, smaller fallback limit;
/// every path here goes through this single constant instead.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// A client-requested, zero-based window over a dataset's documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Zero-based page index.
    pub page: u64,

    /// Rows per page, always positive.
    pub size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: u64) -> Self {
        Self {
            page,
            ..Default::default()
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size.max(1);
        self
    }

    /// Row-index window covered by this page.
    ///
    /// Saturates near `u64::MAX`: the page index comes straight from an
    /// untrusted query parameter, and a wrapped window must not turn
    /// into a bogus low range.
    pub fn window(&self) -> PageWindow {
        let from = self.page.saturating_mul(self.size as u64);
        PageWindow {
            from,
            to: from.saturating_add(self.size as u64),
        }
    }

    pub fn next(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            size: self.size,
        }
    }

    pub fn prev(&self) -> Option<Self> {
        if self.page == 0 {
            None
        } else {
            Some(Self {
                page: self.page - 1,
                size: self.size,
            })
        }
    }

    pub fn is_first_page(&self) -> bool {
        self.page == 0
    }
}

/// Half-open row-index range `[from, to)` requested from the data store
/// for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub from: u64,
    pub to: u64,
}

impl PageWindow {
    /// Number of rows the window can hold.
    pub fn limit(&self) -> u64 {
        self.to.saturating_sub(self.from)
    }

    pub fn contains(&self, row_index: u64) -> bool {
        row_index >= self.from && row_index < self.to
    }
}

/// One resolved page of documents plus the range-independent total count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult {
    /// Documents inside the window, never more than `size`.
    pub documents: Vec<Document>,

    /// Total matching rows for the dataset/owner pair.
    pub count: u64,

    /// Echoed zero-based page index.
    pub page: u64,

    /// Page size the window was computed with.
    pub size: u32,
}

impl PageResult {
    pub fn empty(request: &PageRequest) -> Self {
        Self {
            documents: Vec::new(),
            count: 0,
            page: request.page,
            size: request.size,
        }
    }

    /// Whether a "Previous" navigation is meaningful.
    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    /// Whether a "Next" navigation is meaningful.
    ///
    /// Disabled exactly when `page*size + size >= count`. Saturating, so
    /// an absurd page index reads as past-the-end rather than wrapping.
    pub fn has_next(&self) -> bool {
        let next_start = self
            .page
            .saturating_mul(self.size as u64)
            .saturating_add(self.size as u64);
        next_start < self.count
    }

    /// Footer label in the form "25 - 50 of 61".
    pub fn display_range(&self) -> String {
        let from = self.page.saturating_mul(self.size as u64);
        format!(
            "{} - {} of {}",
            from,
            from.saturating_add(self.size as u64),
            self.count
        )
    }
}
