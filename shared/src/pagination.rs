//! Paginated results
//!
//! Page numbers are 1-based. An empty result still has one page so that
//! "page 1 of 1" is always a valid state for the pager.

use serde::{Deserialize, Serialize};

/// Page metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Requested page (not clamped)
    pub page: u32,
    pub page_size: u32,
    pub total_items: u64,
    /// `ceil(total_items / page_size)`, and 1 when there are no items
    pub total_pages: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl PageInfo {
    /// Compute metadata; `page_size` must be non-zero
    pub fn new(page: u32, page_size: u32, total_items: u64) -> Self {
        let total_pages = if total_items == 0 || page_size == 0 {
            1
        } else {
            total_items.div_ceil(page_size as u64) as u32
        };

        Self {
            page,
            page_size,
            total_items,
            total_pages,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
        }
    }

    /// 1-based `(first, last)` item numbers shown on this page.
    ///
    /// `(0, 0)` when the page holds nothing (empty result or page out of range).
    pub fn item_range(&self) -> (u64, u64) {
        let start = (self.page.saturating_sub(1) as u64) * self.page_size as u64;
        if self.page == 0 || start >= self.total_items {
            return (0, 0);
        }
        let end = (start + self.page_size as u64).min(self.total_items);
        (start + 1, end)
    }

    /// Page numbers for the pager, at most `max_buttons` consecutive pages
    /// centred on the current one, plus `1, …` / `…, last` when the window
    /// does not reach the edges.
    pub fn window(&self, max_buttons: u32) -> Vec<PageToken> {
        page_window(self.page, self.total_pages, max_buttons)
    }
}

/// Entry of the pager control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "page")]
pub enum PageToken {
    Page(u32),
    Ellipsis,
}

/// Build the pager window around `current`
pub fn page_window(current: u32, total_pages: u32, max_buttons: u32) -> Vec<PageToken> {
    let max_buttons = max_buttons.max(1);
    if total_pages <= max_buttons {
        return (1..=total_pages).map(PageToken::Page).collect();
    }

    let mut start = current.saturating_sub(max_buttons / 2).max(1);
    let mut end = start.saturating_add(max_buttons - 1);
    if end > total_pages {
        end = total_pages;
        start = end.saturating_sub(max_buttons - 1).max(1);
    }

    let mut tokens = Vec::with_capacity(max_buttons as usize + 4);
    if start > 1 {
        tokens.push(PageToken::Page(1));
        tokens.push(PageToken::Ellipsis);
    }
    tokens.extend((start..=end).map(PageToken::Page));
    if end < total_pages {
        tokens.push(PageToken::Ellipsis);
        tokens.push(PageToken::Page(total_pages));
    }
    tokens
}

/// One page of results plus metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    pub data: Vec<T>,
    pub pagination: PageInfo,
}

impl<T> PaginatedResult<T> {
    pub fn new(data: Vec<T>, pagination: PageInfo) -> Self {
        Self { data, pagination }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Convert the page items, keeping the metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResult<U> {
        PaginatedResult {
            data: self.data.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}
