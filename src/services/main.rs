use crate::domain::types::PageNumber;
use crate::dto::main::IndexPageData;
pub use crate::dto::main::IndexQuery;
use crate::links::RequestContext;
use crate::models::config::ServerConfig;
use crate::pagination::{render, resolve_current_page};
use crate::services::ServiceResult;

/// Loads one page of the demo listing together with its pagination control.
pub fn load_index_page(
    request: &RequestContext,
    config: &ServerConfig,
    query: IndexQuery,
) -> ServiceResult<IndexPageData> {
    let per_page = config.items_per_page.max(1);

    let filter = query
        .filter
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let matching = (1..=config.total_items)
        .map(|n| format!("Item {n}"))
        .filter(|name| filter.as_deref().is_none_or(|term| name.contains(term)))
        .collect::<Vec<_>>();
    let total_items = matching.len();

    let total_pages = PageNumber::new(total_items.div_ceil(per_page).max(1))?;
    let page = resolve_current_page(request.params()).map_err(|err| {
        log::warn!("Rejected page parameter: {err}");
        err
    })?;

    let pagination = render(request.base_url(), page, total_pages, request.params())?;

    let items = matching
        .into_iter()
        .skip((page.get() - 1) * per_page)
        .take(per_page)
        .collect();

    Ok(IndexPageData {
        items,
        total_items,
        page,
        total_pages,
        pagination,
        filter,
    })
}
