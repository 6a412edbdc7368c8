use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    error::GridError,
    models::{Coordinate, Matrix},
};

/// State of a single grid cell. Serialised as `0` (open) or `1` (wall).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Open,
    Wall,
}

impl Serialize for CellState {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            CellState::Open => s.serialize_u8(0),
            CellState::Wall => s.serialize_u8(1),
        }
    }
}

impl<'de> Deserialize<'de> for CellState {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        match u8::deserialize(d)? {
            0 => Ok(CellState::Open),
            1 => Ok(CellState::Wall),
            other => Err(serde::de::Error::custom(format!(
                "invalid cell value {other}, expected 0 (open) or 1 (wall)"
            ))),
        }
    }
}

/// Rectangular grid of cells. Always at least 1×1 with every row `cols` wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Matrix<CellState>,
}

impl Grid {
    pub fn filled(rows: usize, cols: usize, state: CellState) -> Self {
        Self {
            rows,
            cols,
            cells: vec![vec![state; cols]; rows],
        }
    }

    /// Builds a grid from client supplied rows, checking it is non-empty and rectangular.
    pub fn from_matrix(cells: Matrix<CellState>) -> Result<Self, GridError> {
        let rows = cells.len();
        let cols = cells.first().ok_or(GridError::EmptyGrid)?.len();
        if cols == 0 {
            return Err(GridError::EmptyRow);
        }
        if let Some((row, found)) = cells
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(GridError::RaggedRow {
                row,
                expected: cols,
                found,
            });
        }
        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn in_bounds(&self, r: isize, c: isize) -> bool {
        r >= 0 && c >= 0 && (r as usize) < self.rows && (c as usize) < self.cols
    }

    /// Panics when `at` is outside the grid.
    pub fn is_open(&self, at: Coordinate) -> bool {
        self.cells[at.r][at.c] == CellState::Open
    }

    pub fn set(&mut self, at: Coordinate, state: CellState) {
        self.cells[at.r][at.c] = state;
    }

    /// The cell `(dr, dc)` away from `at`, if it lies inside the grid.
    pub fn offset(&self, at: Coordinate, dr: isize, dc: isize) -> Option<Coordinate> {
        let r = at.r as isize + dr;
        let c = at.c as isize + dc;
        self.in_bounds(r, c)
            .then(|| Coordinate::new(r as usize, c as usize))
    }

    pub fn cells(&self) -> &Matrix<CellState> {
        &self.cells
    }

    pub fn into_matrix(self) -> Matrix<CellState> {
        self.cells
    }
}
