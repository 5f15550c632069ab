use std::ops::Range;

/// Page size choices offered by list views
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Pages shown on each side of the current one
const WINDOW_RADIUS: usize = 2;

/// Client-side pagination state; pages are 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(per_page: usize) -> Self {
        Self {
            page: 1,
            per_page: if per_page == 0 { DEFAULT_PAGE_SIZE } else { per_page },
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Changing the page size always returns to page 1
    pub fn set_per_page(&mut self, per_page: usize) {
        if per_page > 0 {
            self.per_page = per_page;
        }
        self.page = 1;
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.per_page).max(1)
    }

    /// Current page clamped to the available pages
    pub fn current_page(&self, total_items: usize) -> usize {
        self.page.min(self.total_pages(total_items))
    }

    /// Index range of the current page within the filtered list
    pub fn range(&self, total_items: usize) -> Range<usize> {
        let page = self.current_page(total_items);
        let start = ((page - 1) * self.per_page).min(total_items);
        let end = (start + self.per_page).min(total_items);
        start..end
    }

    /// Page numbers shown in the pager: current ±2, within bounds
    pub fn page_window(&self, total_items: usize) -> Vec<usize> {
        let total = self.total_pages(total_items);
        let current = self.current_page(total_items);
        let first = current.saturating_sub(WINDOW_RADIUS).max(1);
        let last = (current + WINDOW_RADIUS).min(total);
        (first..=last).collect()
    }

    pub fn has_next(&self, total_items: usize) -> bool {
        self.current_page(total_items) < self.total_pages(total_items)
    }

    pub fn has_prev(&self, total_items: usize) -> bool {
        self.current_page(total_items) > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let p = Pagination::new(10);
        assert_eq!(p.total_pages(0), 1);
        assert_eq!(p.total_pages(10), 1);
        assert_eq!(p.total_pages(11), 2);
    }

    #[test]
    fn test_pages_partition_without_gaps() {
        let mut p = Pagination::new(10);
        let total = 34;
        let mut seen = Vec::new();
        for page in 1..=p.total_pages(total) {
            p.set_page(page);
            seen.extend(p.range(total));
        }
        assert_eq!(seen, (0..total).collect::<Vec<_>>());
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut p = Pagination::new(10);
        p.set_page(3);
        p.set_per_page(50);
        assert_eq!(p.page(), 1);
        assert_eq!(p.per_page(), 50);
    }

    #[test]
    fn test_page_window() {
        let mut p = Pagination::new(10);
        p.set_page(1);
        assert_eq!(p.page_window(100), vec![1, 2, 3]);
        p.set_page(5);
        assert_eq!(p.page_window(100), vec![3, 4, 5, 6, 7]);
        p.set_page(10);
        assert_eq!(p.page_window(100), vec![8, 9, 10]);
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let mut p = Pagination::new(10);
        p.set_page(9);
        assert_eq!(p.current_page(25), 3);
        assert_eq!(p.range(25), 20..25);
    }
}
