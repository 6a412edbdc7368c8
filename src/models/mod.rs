use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod grid;
pub mod request;

/// Convenience alias for a two-dimensional grid.
pub type Matrix<T> = Vec<Vec<T>>;

/// A zero-based (row, col) position within a grid, row being the vertical index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct Coordinate {
    pub r: usize,
    pub c: usize,
}

impl Coordinate {
    pub const fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }
}

/// A position as sent by clients. Signed so that negative values reach
/// validation and are reported as out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Point {
    pub r: i64,
    pub c: i64,
}
