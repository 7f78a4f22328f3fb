//! Page window arithmetic shared by paginated listings.

use serde::Serialize;

pub const DEFAULT_PAGE: i64 = 1;
pub const MAX_PAGE: i64 = 10_000;
pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE_SIZE: i64 = 100;

/// A clamped `(page, size)` pair. Both values are always at least one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    page: usize,
    size: usize,
}

impl PageWindow {
    /// Builds a window from raw request values.
    ///
    /// Missing values fall back to the defaults. The page is clamped into
    /// `[1, MAX_PAGE]` and the size into `[1, MAX_PAGE_SIZE]`, so zero and
    /// negative sizes become one.
    pub fn new(page: Option<i64>, size: Option<i64>) -> Self {
        let page = page.unwrap_or(DEFAULT_PAGE).clamp(1, MAX_PAGE);
        let size = size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
        Self {
            page: page as usize,
            size: size as usize,
        }
    }

    pub const fn page(&self) -> usize {
        self.page
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of rows skipped before this page: `(page - 1) * size`.
    pub const fn offset(&self) -> usize {
        (self.page - 1) * self.size
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// One page of results together with the total number of matching rows.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub page: usize,
    pub size: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_count: usize, window: PageWindow) -> Self {
        Self {
            items,
            total_count,
            page: window.page(),
            size: window.size(),
        }
    }

    /// Converts every item while keeping the page metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page: self.page,
            size: self.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_absent() {
        let window = PageWindow::default();
        assert_eq!((window.page(), window.size()), (1, 20));
        assert_eq!(window.offset(), 0);
    }

    #[test]
    fn size_is_clamped_into_range() {
        for size in [1, 50, 100] {
            assert_eq!(PageWindow::new(None, Some(size)).size(), size as usize);
        }
        assert_eq!(PageWindow::new(None, Some(101)).size(), 100);
        assert_eq!(PageWindow::new(None, Some(0)).size(), 1);
        assert_eq!(PageWindow::new(None, Some(-5)).size(), 1);
    }

    #[test]
    fn page_is_clamped_into_range() {
        assert_eq!(PageWindow::new(Some(0), None).page(), 1);
        assert_eq!(PageWindow::new(Some(-3), None).page(), 1);
        assert_eq!(PageWindow::new(Some(10_001), None).page(), 10_000);
        assert_eq!(PageWindow::new(Some(7), None).page(), 7);
    }

    #[test]
    fn offset_skips_previous_pages() {
        assert_eq!(PageWindow::new(Some(3), Some(25)).offset(), 50);
        assert_eq!(PageWindow::new(Some(10_000), Some(100)).offset(), 999_900);
    }

    #[test]
    fn map_keeps_metadata() {
        let page = Page::new(vec![1, 2], 12, PageWindow::new(Some(2), Some(2)));
        let mapped = page.map(|n| n * 10);
        assert_eq!(mapped.items, vec![10, 20]);
        assert_eq!((mapped.total_count, mapped.page, mapped.size), (12, 2, 2));
    }
}
