use actix_web::{error::InternalError, web, HttpResponse};

use crate::{
    api::handlers::{post_generate, post_solve},
    models::request::ErrorResponse,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").service(post_generate).service(post_solve));
}

/// JSON extractor config that reports malformed bodies as 400 with an `error` field.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = format!("JSON deserialization error: {err}");
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ErrorResponse {
                error: message,
                field: None,
            }),
        )
        .into()
    })
}
