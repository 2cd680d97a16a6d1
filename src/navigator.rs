//! Boundary-aware neighbours of the current page.

use crate::domain::page_set::PageSet;
use crate::domain::types::PageNumber;
use crate::errors::{PaginationError, PaginationResult};

/// Returns the page after `current`, or `None` when `current` is the last page.
///
/// A `current` beyond `total` is rejected rather than clamped.
pub fn next_page(current: PageNumber, total: PageNumber) -> PaginationResult<Option<PageNumber>> {
    if current > total {
        return Err(PaginationError::InvalidInput(format!(
            "page {current} is beyond the last page {total}"
        )));
    }

    if current == total {
        Ok(None)
    } else {
        Ok(Some(current.successor()))
    }
}

/// Returns the page before `current`, or `None` on the first page.
pub fn prev_page(current: PageNumber) -> Option<PageNumber> {
    current.predecessor()
}

/// Computes both neighbours of `current` in one go.
pub fn page_set(current: PageNumber, total: PageNumber) -> PaginationResult<PageSet> {
    Ok(PageSet {
        current,
        total,
        next: next_page(current, total)?,
        prev: prev_page(current),
    })
}
