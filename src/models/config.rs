//! Configuration model loaded from external sources.

use serde::Deserialize;
use validator::Validate;

#[derive(Clone, Debug, Deserialize, Validate)]
/// Settings of the demo listing server.
pub struct ServerConfig {
    pub address: String,
    #[validate(range(min = 1))]
    pub port: u16,
    /// Glob handed to `Tera::new`, e.g. `templates/**/*`.
    pub templates_dir: String,
    /// Number of synthetic entries in the listing.
    pub total_items: usize,
    #[validate(range(min = 1))]
    pub items_per_page: usize,
}
