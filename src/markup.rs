//! HTML rendering of a [`PaginationView`] through Tera.
//!
//! The component template ships inside the crate and is registered under
//! [`PAGINATION_TEMPLATE`], so host templates can `{% include %}` it once
//! [`insert_context`] has populated their context.

use tera::{Context, Tera};

use crate::errors::{PaginationError, PaginationResult};
use crate::pagination::PaginationView;

pub const PAGINATION_TEMPLATE: &str = "components/pagination.html";

const PAGINATION_SOURCE: &str = include_str!("../templates/components/pagination.html");

/// Left chevron shown inside the previous-page button.
pub const SVG_PREVIOUS: &str = concat!(
    r#"<svg style="width:24px;height:24px" viewBox="0 0 24 24">"#,
    r#"<path fill="currentColor" d="M15.41,16.58L10.83,12L15.41,7.41L14,6L8,12L14,18L15.41,16.58Z" />"#,
    "</svg>",
);

/// Right chevron shown inside the next-page button.
pub const SVG_NEXT: &str = concat!(
    r#"<svg style="width:24px;height:24px" viewBox="0 0 24 24">"#,
    r#"<path fill="currentColor" d="M8.59,16.58L13.17,12L8.59,7.41L10,6L16,12L10,18L8.59,16.58Z" />"#,
    "</svg>",
);

/// Adds (or replaces) the pagination component in `tera`.
pub fn register_template(tera: &mut Tera) -> PaginationResult<()> {
    tera.add_raw_template(PAGINATION_TEMPLATE, PAGINATION_SOURCE.trim_end())?;
    Ok(())
}

/// A `Tera` instance holding only the pagination component.
pub fn pagination_tera() -> PaginationResult<Tera> {
    let mut tera = Tera::default();
    register_template(&mut tera)?;
    Ok(tera)
}

/// Inserts the variables the component template reads.
pub fn insert_context(context: &mut Context, view: &PaginationView) {
    context.insert("pagination_items", view.items());
    context.insert("pagination_icon_previous", SVG_PREVIOUS);
    context.insert("pagination_icon_next", SVG_NEXT);
}

/// Renders `view` as `<div class='pl-pagination'><ul>...</ul></div>`.
pub fn render_markup(tera: &Tera, view: &PaginationView) -> PaginationResult<String> {
    let mut context = Context::new();
    insert_context(&mut context, view);
    tera.render(PAGINATION_TEMPLATE, &context).map_err(|err| {
        log::error!("Failed to render pagination: {err}");
        PaginationError::from(err)
    })
}
