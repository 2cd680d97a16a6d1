use crate::domain::types::PageNumber;
use crate::pagination::PaginationView;

/// Query parameters accepted by the index page service.
#[derive(Debug, Default)]
pub struct IndexQuery {
    /// Optional substring the listing is filtered by.
    pub filter: Option<String>,
}

/// Data required to render the main index template.
pub struct IndexPageData {
    /// Entries shown on the current page.
    pub items: Vec<String>,
    /// Number of entries matching the filter across all pages.
    pub total_items: usize,
    pub page: PageNumber,
    pub total_pages: PageNumber,
    /// Pagination control linking to the neighbouring pages.
    pub pagination: PaginationView,
    /// Filter echoed back to the template when present.
    pub filter: Option<String>,
}
