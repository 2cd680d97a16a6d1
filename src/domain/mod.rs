//! Domain value objects shared by the navigator, link builder and renderer.

pub mod page_set;
pub mod types;
