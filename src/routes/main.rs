use actix_web::{Responder, get, web};
use tera::{Context, Tera};

use crate::links::RequestContext;
use crate::markup::insert_context;
use crate::models::config::ServerConfig;
use crate::routes::{error_response, render_template};
use crate::services::main::{IndexQuery, load_index_page};

#[get("/")]
pub async fn show_index(
    request: RequestContext,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let query = IndexQuery {
        filter: request.params().get("filter").map(str::to_string),
    };

    let data = match load_index_page(&request, &server_config, query) {
        Ok(data) => data,
        Err(err) => return error_response(&err),
    };

    let mut context = Context::new();
    context.insert("items", &data.items);
    context.insert("total_items", &data.total_items);
    context.insert("page", &data.page);
    context.insert("total_pages", &data.total_pages);
    context.insert("filter", &data.filter);
    insert_context(&mut context, &data.pagination);

    render_template(&tera, "main/index.html", &context)
}
