use serde::Serialize;

use crate::domain::types::PageNumber;

/// Position of the current page within a listing.
///
/// `next` is `None` exactly when `current == total` and `prev` is `None`
/// exactly when `current` is the first page. Built by
/// [`crate::navigator::page_set`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageSet {
    pub current: PageNumber,
    pub total: PageNumber,
    pub next: Option<PageNumber>,
    pub prev: Option<PageNumber>,
}
