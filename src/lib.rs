//! Previous/next pagination control with a sliding window of page links.
//!
//! The `data` feature holds the pure core: [`navigator`] finds the
//! neighbouring pages, [`links`] builds their URLs from the current request
//! and [`pagination`] assembles the ordered items. The `server` feature adds
//! Tera markup and an Actix-web host serving a paged demo listing.

pub mod domain;
mod error_conversions;
pub mod errors;
pub mod links;
pub mod navigator;
pub mod pagination;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod markup;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_web::{App, HttpServer, middleware, web};
    use tera::Tera;

    use crate::markup::register_template;
    use crate::models::config::ServerConfig;
    use crate::routes::main::show_index;

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let mut tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;
        register_template(&mut tera)
            .map_err(|e| std::io::Error::other(format!("Failed to register pagination: {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!(
            "Serving {} items, {} per page, on {}:{}",
            server_config.total_items,
            server_config.items_per_page,
            bind_address.0,
            bind_address.1
        );

        HttpServer::new(move || {
            App::new()
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(show_index)
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
