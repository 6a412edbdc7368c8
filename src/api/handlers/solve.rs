use actix_web::{post, web, HttpResponse, Responder};
use log::{debug, warn};

use crate::{
    api::handlers::bad_request,
    config::Limits,
    error::GridError,
    logic::{
        solver::solve_maze,
        validation::{validate_endpoints, validate_grid},
    },
    models::request::{ErrorResponse, SolveRequest, SolveResult},
};

/// POST /api/solve
/// Runs a breadth-first search between two open cells of the supplied grid.
/// An unreachable end is a normal 200 response with `found: false`.
#[utoipa::path(
    post,
    context_path = "/api",
    tag = "maze",
    request_body = SolveRequest,
    responses(
        (status = 200, description = "Search outcome with visitation order and path", body = SolveResult),
        (status = 400, description = "Malformed grid, or start/end out of bounds or on a wall", body = ErrorResponse),
    )
)]
#[post("/solve")]
pub async fn post_solve(body: web::Json<SolveRequest>, limits: web::Data<Limits>) -> impl Responder {
    let request = body.into_inner();

    let prepared = validate_grid(request.grid, limits.get_ref()).and_then(|grid| {
        let (start, end) = validate_endpoints(&grid, request.start, request.end)?;
        Ok::<_, GridError>((grid, start, end))
    });
    let (grid, start, end) = match prepared {
        Ok(prepared) => prepared,
        Err(e) => {
            warn!("Rejected solve request: {e}");
            return bad_request(&e);
        }
    };

    debug!(
        "Solving {}x{} grid from {start:?} to {end:?}",
        grid.rows(),
        grid.cols()
    );
    let result = solve_maze(&grid, start, end);
    debug!(
        "Search visited {} cell(s), found = {}",
        result.visited_order.len(),
        result.found
    );

    HttpResponse::Ok().json(result)
}
