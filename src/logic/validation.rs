use crate::{
    config::Limits,
    error::{Endpoint, GridError},
    models::{
        grid::{CellState, Grid},
        Coordinate, Matrix, Point,
    },
};

/// Checks requested maze dimensions and converts them to sizes.
pub fn validate_dimensions(
    rows: i64,
    cols: i64,
    limits: &Limits,
) -> Result<(usize, usize), GridError> {
    let (Ok(r), Ok(c)) = (usize::try_from(rows), usize::try_from(cols)) else {
        return Err(GridError::NonPositiveDimensions { rows, cols });
    };
    if r == 0 || c == 0 {
        return Err(GridError::NonPositiveDimensions { rows, cols });
    }
    check_size(r, c, limits)?;
    Ok((r, c))
}

/// Builds a [`Grid`] from a client matrix, rejecting malformed or oversized input.
pub fn validate_grid(cells: Matrix<CellState>, limits: &Limits) -> Result<Grid, GridError> {
    let grid = Grid::from_matrix(cells)?;
    check_size(grid.rows(), grid.cols(), limits)?;
    Ok(grid)
}

/// Resolves both endpoints to in-bounds open cells. `start` is checked first.
pub fn validate_endpoints(
    grid: &Grid,
    start: Point,
    end: Point,
) -> Result<(Coordinate, Coordinate), GridError> {
    Ok((
        resolve_endpoint(grid, start, Endpoint::Start)?,
        resolve_endpoint(grid, end, Endpoint::End)?,
    ))
}

fn resolve_endpoint(grid: &Grid, point: Point, which: Endpoint) -> Result<Coordinate, GridError> {
    let out_of_bounds = || GridError::OutOfBounds {
        which,
        r: point.r,
        c: point.c,
        rows: grid.rows(),
        cols: grid.cols(),
    };
    let r = isize::try_from(point.r).map_err(|_| out_of_bounds())?;
    let c = isize::try_from(point.c).map_err(|_| out_of_bounds())?;
    if !grid.in_bounds(r, c) {
        return Err(out_of_bounds());
    }

    let at = Coordinate::new(r as usize, c as usize);
    if !grid.is_open(at) {
        return Err(GridError::OnWall {
            which,
            r: at.r,
            c: at.c,
        });
    }
    Ok(at)
}

fn check_size(rows: usize, cols: usize, limits: &Limits) -> Result<(), GridError> {
    match rows.checked_mul(cols) {
        Some(cells) if cells <= limits.max_cells => Ok(()),
        _ => Err(GridError::TooLarge {
            rows,
            cols,
            max_cells: limits.max_cells,
        }),
    }
}
