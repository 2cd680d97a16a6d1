//! Sliding pagination window around the current page.
//!
//! For page `c` of `t` the window is
//! `prev, c-2, [1...], c-1, c, c+1, c+2, [...t], next`, each entry present
//! only when the page exists. The first-page and last-page entries are links
//! labelled with an ellipsis and appear once the window no longer reaches the
//! boundary.

use serde::Serialize;

use crate::domain::types::{PageNumber, QueryParameters};
use crate::errors::{PaginationError, PaginationResult};
use crate::links::{RequestContext, build_url};
use crate::navigator::{next_page, page_set, prev_page};

/// One entry of the rendered control.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaginationItem {
    PrevButton { url: String },
    PageLink { number: PageNumber, url: String },
    Ellipsis { label: String, url: String },
    Current { number: PageNumber },
    NextButton { url: String },
}

impl PaginationItem {
    /// Whether the item counts towards the numbered window (links and ellipses).
    pub fn is_page_entry(&self) -> bool {
        matches!(self, Self::PageLink { .. } | Self::Ellipsis { .. })
    }
}

/// Ordered items of a single render call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PaginationView {
    items: Vec<PaginationItem>,
}

impl PaginationView {
    pub fn items(&self) -> &[PaginationItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of page links and ellipses in the view.
    pub fn page_entries(&self) -> usize {
        self.items.iter().filter(|item| item.is_page_entry()).count()
    }
}

struct ViewBuilder<'a> {
    base_url: &'a str,
    params: &'a QueryParameters,
    items: Vec<PaginationItem>,
}

impl ViewBuilder<'_> {
    fn url(&self, page: PageNumber) -> String {
        build_url(self.base_url, self.params, page)
    }

    fn prev_button(&mut self, page: PageNumber) {
        let url = self.url(page);
        self.items.push(PaginationItem::PrevButton { url });
    }

    fn page_link(&mut self, number: PageNumber) {
        let url = self.url(number);
        self.items.push(PaginationItem::PageLink { number, url });
    }

    fn ellipsis(&mut self, label: String, page: PageNumber) {
        let url = self.url(page);
        self.items.push(PaginationItem::Ellipsis { label, url });
    }

    fn next_button(&mut self, page: PageNumber) {
        let url = self.url(page);
        self.items.push(PaginationItem::NextButton { url });
    }
}

/// Builds the pagination view for `current` of `total` pages.
///
/// A page in the middle of a long listing gets three entries on each side:
/// `c-2`, the `1...` jump and `c-1` before it, `c+1`, `c+2` and the `...t`
/// jump after it. Every link points at `base_url` with `params` carried
/// over and `page` overridden. Fails with [`PaginationError::InvalidInput`]
/// when `current` is beyond `total`.
pub fn render(
    base_url: &str,
    current: PageNumber,
    total: PageNumber,
    params: &QueryParameters,
) -> PaginationResult<PaginationView> {
    let pages = page_set(current, total)?;
    let mut view = ViewBuilder {
        base_url,
        params,
        items: Vec::with_capacity(9),
    };

    if let Some(prev) = pages.prev {
        view.prev_button(prev);

        if let Some(second_prev) = prev_page(prev) {
            view.page_link(second_prev);
            if second_prev != PageNumber::FIRST {
                view.ellipsis(format!("{}...", PageNumber::FIRST), PageNumber::FIRST);
            }
        }

        view.page_link(prev);
    }

    view.items.push(PaginationItem::Current { number: current });

    if let Some(next) = pages.next {
        view.page_link(next);

        if let Some(second_next) = next_page(next, total)? {
            view.page_link(second_next);
            if second_next != total {
                view.ellipsis(format!("...{total}"), total);
            }
        }

        view.next_button(next);
    }

    Ok(PaginationView { items: view.items })
}

/// Reads the current page from the `page` query parameter.
///
/// A missing parameter means the first page. Anything other than a positive
/// integer is rejected.
pub fn resolve_current_page(params: &QueryParameters) -> PaginationResult<PageNumber> {
    match params.get("page") {
        None => Ok(PageNumber::FIRST),
        Some(raw) => raw.parse::<PageNumber>().map_err(PaginationError::from),
    }
}

/// Renders the control for the request described by `ctx`.
pub fn render_for_request(
    ctx: &RequestContext,
    total: PageNumber,
) -> PaginationResult<PaginationView> {
    let current = resolve_current_page(ctx.params())?;
    render(ctx.base_url(), current, total, ctx.params())
}
