use actix_web::HttpResponse;
use tera::{Context, Tera};

use crate::services::ServiceError;

pub mod main;

/// Renders `template` with `context`, answering 500 when Tera fails.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Maps a service failure onto an HTTP response.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    match err {
        ServiceError::InvalidInput(message) => HttpResponse::BadRequest().body(message.clone()),
        ServiceError::Internal(message) => {
            log::error!("Internal error: {message}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
