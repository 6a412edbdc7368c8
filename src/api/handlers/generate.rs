use actix_web::{post, web, HttpResponse, Responder};
use log::{debug, warn};
use rand::{rngs::StdRng, thread_rng, Rng, SeedableRng};

use crate::{
    api::handlers::bad_request,
    config::Limits,
    logic::{generator::generate_maze, validation::validate_dimensions},
    models::request::{ErrorResponse, GenerateRequest, GenerateResponse},
};

/// POST /api/generate
/// Generates a random maze of the requested size, rooted at (0, 0).
#[utoipa::path(
    post,
    context_path = "/api",
    tag = "maze",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated maze and the seed that reproduces it", body = GenerateResponse),
        (status = 400, description = "Non-positive or oversized dimensions", body = ErrorResponse),
    )
)]
#[post("/generate")]
pub async fn post_generate(
    body: web::Json<GenerateRequest>,
    limits: web::Data<Limits>,
) -> impl Responder {
    let request = body.into_inner();

    let (rows, cols) = match validate_dimensions(request.rows, request.cols, limits.get_ref()) {
        Ok(dimensions) => dimensions,
        Err(e) => {
            warn!("Rejected generate request: {e}");
            return bad_request(&e);
        }
    };

    let seed = request.seed.unwrap_or_else(|| thread_rng().gen());
    debug!("Generating {rows}x{cols} maze with seed {seed}");
    let grid = generate_maze(rows, cols, &mut StdRng::seed_from_u64(seed));

    HttpResponse::Ok().json(GenerateResponse {
        grid: grid.into_matrix(),
        seed,
    })
}
