//! Pagination over already-fetched question lists

use serde::Deserialize;

/// Questions returned per page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Requested page (1-indexed).
///
/// Not clamped: page 0 or a page past the end produces an empty slice,
/// which the list endpoints report as 404.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
}

impl Pagination {
    pub fn new(page: i64) -> Self {
        Self { page }
    }

    /// Index of the first item on this page, `None` when the page starts
    /// before the list.
    pub fn offset(&self) -> Option<usize> {
        let start = self.page.checked_sub(1)?.checked_mul(QUESTIONS_PER_PAGE as i64)?;
        usize::try_from(start).ok()
    }

    pub fn limit(&self) -> usize {
        QUESTIONS_PER_PAGE
    }

    /// Copy out the items that fall on this page.
    pub fn slice<T: Clone>(&self, items: &[T]) -> Vec<T> {
        match self.offset() {
            Some(start) if start < items.len() => {
                let end = start.saturating_add(self.limit()).min(items.len());
                items[start..end].to_vec()
            }
            _ => Vec::new(),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1 }
    }
}

/// `?page=` query parameter.
///
/// Kept as a string so a malformed value falls back to page 1
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl From<PageParams> for Pagination {
    fn from(params: PageParams) -> Self {
        let page = params
            .page
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1);
        Self::new(page)
    }
}
