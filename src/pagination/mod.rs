use std::ops::Range;

pub(crate) const PAGE_SIZE: usize = 10;

/// Client-side pager over an already-fetched list. Pages are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Paginator {
    page_size: usize,
    total: usize,
    current: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            total: 0,
            current: 1,
        }
    }

    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    fn last_page(&self) -> usize {
        self.page_count().max(1)
    }

    /// Called whenever the underlying list changes.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.current = self.current.clamp(1, self.last_page());
    }

    pub fn go_to(&mut self, page: usize) {
        self.current = page.clamp(1, self.last_page());
    }

    pub fn next(&mut self) {
        self.go_to(self.current.saturating_add(1));
    }

    pub fn prev(&mut self) {
        self.go_to(self.current.saturating_sub(1));
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.page_count()
    }

    pub fn range(&self) -> Range<usize> {
        let start = ((self.current - 1) * self.page_size).min(self.total);
        let end = (start + self.page_size).min(self.total);
        start..end
    }

    pub fn page_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let r = self.range();
        let end = r.end.min(items.len());
        let start = r.start.min(end);
        &items[start..end]
    }
}
