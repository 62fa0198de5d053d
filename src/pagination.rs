use serde::{Deserialize, Serialize};

/// Default page size used by list endpoints.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 6;

/// Page request applied to repository list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    /// 1-based page number.
    pub page: usize,
    /// Number of items per page.
    pub per_page: usize,
}

/// One page of results together with paging metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, page: usize, total_items: usize, per_page: usize) -> Self {
        // Callers pass page sizes straight from query params.
        let per_page = per_page.max(1);
        Self {
            items,
            page,
            total_pages: total_items.div_ceil(per_page),
            total_items,
        }
    }
}
