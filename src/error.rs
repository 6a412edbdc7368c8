use std::fmt;

use thiserror::Error;

/// Which endpoint of a solve request an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl Endpoint {
    pub fn as_str(self) -> &'static str {
        match self {
            Endpoint::Start => "start",
            Endpoint::End => "end",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input rejected before any algorithm runs. Never used for "no path".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Grid must contain at least one row.")]
    EmptyGrid,
    #[error("Grid rows must not be empty.")]
    EmptyRow,
    #[error("Grid row {row} has {found} cell(s), expected {expected}.")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Maze dimensions (rows, cols) must be strictly positive, got {rows}x{cols}.")]
    NonPositiveDimensions { rows: i64, cols: i64 },
    #[error("A {rows}x{cols} grid exceeds the limit of {max_cells} cells.")]
    TooLarge {
        rows: usize,
        cols: usize,
        max_cells: usize,
    },
    #[error("The {which} position ({r}, {c}) is outside the {rows}x{cols} grid.")]
    OutOfBounds {
        which: Endpoint,
        r: i64,
        c: i64,
        rows: usize,
        cols: usize,
    },
    #[error("The {which} position ({r}, {c}) is a wall.")]
    OnWall { which: Endpoint, r: usize, c: usize },
}

impl GridError {
    /// Name of the request field at fault.
    pub fn field(&self) -> &'static str {
        match self {
            GridError::EmptyGrid
            | GridError::EmptyRow
            | GridError::RaggedRow { .. }
            | GridError::TooLarge { .. } => "grid",
            GridError::NonPositiveDimensions { .. } => "rows/cols",
            GridError::OutOfBounds { which, .. } | GridError::OnWall { which, .. } => {
                which.as_str()
            }
        }
    }
}
