use shared::domain::PageSize;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaginationController {
    page: u32,
    page_size: PageSize,
}

impl PaginationController {
    pub fn new(page_size: PageSize) -> Self {
        Self { page: 0, page_size }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// True on the first page, where `previous_page` must not be invoked.
    pub fn previous_disabled(&self) -> bool {
        self.page == 0
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.page_size.get())
    }

    /// Advances one page. There is no upper bound: a page past the end of the
    /// collection simply comes back short or empty.
    pub fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    /// Steps back one page. Returns `false` and leaves the page untouched when
    /// called on the first page.
    pub fn previous_page(&mut self) -> bool {
        if self.previous_disabled() {
            warn!("previous page requested while already on the first page");
            return false;
        }
        self.page -= 1;
        true
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        *self = Self { page: 0, page_size };
    }
}

#[cfg(test)]
#[path = "tests/pagination_tests.rs"]
mod tests;
