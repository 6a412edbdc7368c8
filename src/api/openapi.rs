use utoipa::OpenApi;

use crate::models::{
    request::{ErrorResponse, GenerateRequest, GenerateResponse, SolveRequest, SolveResult},
    Coordinate, Point,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Labyrinth API",
        description = "Generates perfect mazes with a randomized recursive backtracker and finds shortest paths through wall/open grids with breadth-first search.",
        version = "0.1.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::generate::post_generate,
        crate::api::handlers::solve::post_solve,
    ),
    components(
        schemas(
            Coordinate, Point,
            GenerateRequest, GenerateResponse,
            SolveRequest, SolveResult,
            ErrorResponse,
        )
    ),
    tags(
        (name = "maze", description = "Maze generation and path solving"),
    )
)]
pub struct ApiDoc;
