// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Page bookkeeping for the project list.

use std::ops::Range;

/// Current page (1-based) over a list whose length is supplied per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// `ceil(count / page_size)`; zero when nothing matches.
    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size)
    }

    /// Index range of the items on the current page.
    pub fn range(&self, count: usize) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(count);
        let end = (start + self.page_size).min(count);
        start..end
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self, count: usize) -> bool {
        self.page < self.total_pages(count)
    }

    pub fn prev(&mut self) {
        if self.can_prev() {
            self.page -= 1;
        }
    }

    pub fn next(&mut self, count: usize) {
        if self.can_next(count) {
            self.page += 1;
        }
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let pages = Pagination::new(10);
        assert_eq!(pages.total_pages(0), 0);
        assert_eq!(pages.total_pages(1), 1);
        assert_eq!(pages.total_pages(10), 1);
        assert_eq!(pages.total_pages(11), 2);
        assert_eq!(pages.total_pages(25), 3);
    }

    #[test]
    fn test_twenty_five_items_by_ten() {
        let mut pages = Pagination::new(10);
        assert_eq!(pages.range(25), 0..10);
        assert!(!pages.can_prev());
        assert!(pages.can_next(25));

        pages.next(25);
        pages.next(25);
        assert_eq!(pages.page(), 3);
        assert_eq!(pages.range(25), 20..25);
        assert!(pages.can_prev());
        assert!(!pages.can_next(25));

        pages.next(25);
        assert_eq!(pages.page(), 3);
    }

    #[test]
    fn test_prev_stops_at_first_page() {
        let mut pages = Pagination::new(5);
        pages.prev();
        assert_eq!(pages.page(), 1);
    }

    #[test]
    fn test_empty_list() {
        let mut pages = Pagination::new(10);
        assert_eq!(pages.range(0), 0..0);
        assert!(!pages.can_next(0));
        pages.next(0);
        assert_eq!(pages.page(), 1);
    }

    #[test]
    fn test_range_after_shrink_is_empty() {
        let mut pages = Pagination::new(10);
        pages.next(25);
        pages.next(25);
        assert_eq!(pages.range(4), 4..4);
        pages.reset();
        assert_eq!(pages.range(4), 0..4);
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let pages = Pagination::new(0);
        assert_eq!(pages.total_pages(3), 3);
        assert_eq!(pages.range(3), 0..1);
    }
}
