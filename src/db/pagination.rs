// Pagination math for the history listing.
//
// Pages are 1-based. An empty store still reports one (empty) page, and
// an out-of-range page returns no rows with correct metadata rather than
// failing. Callers validate page and page_size >= 1 before computing.
// All arithmetic widens to u64 so any valid u32 page/page_size pair is
// safe to compute with.

/// Computed metadata for one page of results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u64,
    pub next_page: Option<u32>,
    pub previous_page: Option<u32>,
}

impl PageMeta {
    /// Compute metadata for a 1-based `page` over `total` rows.
    pub fn compute(total: u64, page: u32, page_size: u32) -> Self {
        let total_pages = total.div_ceil(u64::from(page_size)).max(1);
        let next_page = if u64::from(page) < total_pages {
            page.checked_add(1)
        } else {
            None
        };
        let previous_page = (page > 1).then_some(page - 1);
        Self {
            page,
            page_size,
            total,
            total_pages,
            next_page,
            previous_page,
        }
    }

    /// Row offset of this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }
}
