//! Fixed-size pagination over an in-memory record slice.
//!
//! Nothing here enforces bounds on the requested page: out-of-range pages
//! produce an empty slice and [`Pagination::set_page`] stores whatever it is
//! given. Only valid page buttons are ever offered to the user.

use serde::Serialize;

/// Records shown per page.
pub const PAGE_SIZE: usize = 8;

/// Records at `[(page_number - 1) * page_size, page_number * page_size)`,
/// clipped to `records.len()`.
///
/// Page 0, a page past the end, or a zero page size yield an empty slice.
pub fn page<T>(records: &[T], page_number: usize, page_size: usize) -> &[T] {
    if page_number == 0 || page_size == 0 {
        return &[];
    }
    let start = (page_number - 1).saturating_mul(page_size);
    if start >= records.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(records.len());
    &records[start..end]
}

/// `ceil(count / page_size)`; zero records means zero pages.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Page controls are only rendered when there is more than one page.
pub fn shows_controls(count: usize, page_size: usize) -> bool {
    count > page_size
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageButton {
    pub number: usize,
    pub active: bool,
}

/// One button per page, `1..=total_pages`, marking `current_page` active.
pub fn page_buttons(total_pages: usize, current_page: usize) -> Vec<PageButton> {
    (1..=total_pages)
        .map(|number| PageButton {
            number,
            active: number == current_page,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { current_page: 1 }
    }
}

impl Pagination {
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn set_page(&mut self, page_number: usize) {
        self.current_page = page_number;
    }
}
