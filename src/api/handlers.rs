use actix_web::HttpResponse;

use crate::{error::GridError, models::request::ErrorResponse};

pub mod generate;
pub mod solve;

pub use generate::post_generate;
pub use solve::post_solve;

/// 400 response carrying the validation message and the offending field.
pub(crate) fn bad_request(err: &GridError) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: err.to_string(),
        field: Some(err.field().into()),
    })
}
