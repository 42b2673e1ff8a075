//! Fixed-size paging over a static list
//!
//! Pages are 1-based. The previous/next controls stop at the bounds instead
//! of wrapping (unlike list selection in `logic::navigation`).

use std::ops::Range;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paginator {
    total: usize,
    page_size: usize,
    current: usize,
}

impl Paginator {
    /// Create a paginator positioned on page 1
    ///
    /// A zero page size is treated as 1.
    pub fn new(total: usize, page_size: usize) -> Self {
        Self {
            total,
            page_size: page_size.max(1),
            current: 1,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of pages: ceil(total / page_size)
    ///
    /// # Examples
    /// ```
    /// use foliotui::logic::pagination::Paginator;
    ///
    /// assert_eq!(Paginator::new(9, 2).page_count(), 5);
    /// assert_eq!(Paginator::new(4, 2).page_count(), 2);
    /// assert_eq!(Paginator::new(0, 2).page_count(), 0);
    /// ```
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    /// Index range of page `k`: [(k-1)*P, min(k*P, N))
    ///
    /// Out-of-range pages yield an empty range.
    pub fn range(&self, page: usize) -> Range<usize> {
        if page == 0 {
            return 0..0;
        }
        let start = ((page - 1) * self.page_size).min(self.total);
        let end = (page * self.page_size).min(self.total);
        start..end
    }

    /// Slice of `items` on the current page
    pub fn page_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range(self.current);
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }

    /// Whether the "previous" control is enabled
    pub fn can_prev(&self) -> bool {
        self.current > 1
    }

    /// Whether the "next" control is enabled
    pub fn can_next(&self) -> bool {
        self.current < self.page_count()
    }

    /// Move to the next page; returns false when disabled
    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Move to the previous page; returns false when disabled
    pub fn prev(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Jump to a page number, clamped into [1, max(1, page_count)]
    pub fn go_to(&mut self, page: usize) {
        self.current = page.clamp(1, self.page_count().max(1));
    }

    /// Back to page 1
    pub fn reset(&mut self) {
        self.current = 1;
    }
}
