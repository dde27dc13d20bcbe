//! Paged results and pagination state.

use serde::{Deserialize, Serialize};

/// Products per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed), always within `1..=total_pages`.
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of items.
    pub total: usize,
    /// Total number of pages, at least 1.
    pub total_pages: usize,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info, clamping `page` into range.
    ///
    /// A `per_page` of 0 is treated as 1.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = total.div_ceil(per_page).max(1);
        let page = page.clamp(1, total_pages);

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.per_page
    }

    /// Every page number, for the numbered buttons.
    pub fn page_numbers(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.total_pages
    }

    /// Check if on first page.
    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    /// Check if on last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE, 0)
    }
}

/// One page of items borrowed from a larger list.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    /// The items on this page.
    pub items: &'a [T],
    /// Pagination info.
    pub pagination: Pagination,
}

impl<T> Page<'_, T> {
    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Slice `items` to the requested page.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> Page<'_, T> {
    let pagination = Pagination::new(page, per_page, items.len());
    let start = pagination.offset().min(items.len());
    let end = (start + pagination.per_page).min(items.len());

    Page {
        items: &items[start..end],
        pagination,
    }
}
