pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Stateful window over an ordered sequence. One instance per consumer; the
/// unfiltered view is the only consumer in practice, category projections
/// render unwindowed.
///
/// The cursor is clamped into `[1, total_pages]` on every read rather than
/// reset when the underlying sequence changes, so a refetch that shrinks
/// the collection can never leave it pointing past the end.
#[derive(Debug, Clone)]
pub struct Pager {
    page_size: usize,
    current: usize,
}

impl Pager {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current: 1,
        }
    }

    /// Page count for a sequence of `len` items, never less than 1.
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    /// The cursor, clamped against the current sequence length.
    pub fn current_page(&self, len: usize) -> usize {
        self.current.clamp(1, self.total_pages(len))
    }

    /// The window for the current page. Size ≤ `page_size`.
    pub fn slice<'a, T>(&self, records: &'a [T]) -> &'a [T] {
        let page = self.current_page(records.len());
        let start = (page - 1) * self.page_size;
        let end = (start + self.page_size).min(records.len());
        if start >= records.len() {
            &[]
        } else {
            &records[start..end]
        }
    }

    /// Advance one page; no-op on the last page.
    pub fn next(&mut self, len: usize) {
        self.current = (self.current_page(len) + 1).min(self.total_pages(len));
    }

    /// Step back one page; no-op on page 1.
    pub fn prev(&mut self, len: usize) {
        self.current = self.current_page(len).saturating_sub(1).max(1);
    }

    /// Jump to a specific page, clamped into range.
    pub fn go_to(&mut self, page: usize, len: usize) {
        self.current = page.clamp(1, self.total_pages(len));
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}
