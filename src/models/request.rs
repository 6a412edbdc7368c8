use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

use crate::models::{grid::CellState, Coordinate, Matrix, Point};

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Number of rows; must be at least 1.
    pub rows: i64,
    /// Number of columns; must be at least 1.
    pub cols: i64,
    /// Random seed. A fresh one is drawn (and echoed back) when omitted.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    /// Row-major grid, `0` = open, `1` = wall.
    #[schema(value_type = Vec<Vec<u8>>)]
    pub grid: Matrix<CellState>,
    /// Seed that reproduces this maze.
    pub seed: u64,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SolveRequest {
    /// Row-major grid, `0` = open, `1` = wall.
    #[schema(value_type = Vec<Vec<u8>>)]
    pub grid: Matrix<CellState>,
    pub start: Point,
    pub end: Point,
}

/// Outcome of a breadth-first search. `path` is empty when `found` is false;
/// `visited_order` always lists every dequeued cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SolveResult {
    pub found: bool,
    pub visited_order: Vec<Coordinate>,
    pub path: Vec<Coordinate>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// Request field the error refers to, when there is one.
    pub field: Option<String>,
}
