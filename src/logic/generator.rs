use rand::{seq::SliceRandom, Rng};

use crate::models::{
    grid::{CellState, Grid},
    Coordinate,
};

/// Cell the carving starts from.
pub const ROOT: Coordinate = Coordinate::new(0, 0);

/// Carving moves two cells at a time so that a wall cell always sits between passages.
const CARVE_STEPS: [(isize, isize); 4] = [(-2, 0), (2, 0), (0, -2), (0, 2)];

/// Generates a maze with the recursive backtracker, then opens the bottom-right corner.
///
/// `rows` and `cols` must both be at least 1.
pub fn generate_maze<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Grid {
    let mut grid = carve_passages(rows, cols, rng);
    open_exit_corner(&mut grid);
    grid
}

/// Randomized depth-first carving from [`ROOT`]. A cell counts as visited once it is open.
///
/// Every cell with even row and column ends up open and connected to the root
/// through exactly one passage sequence.
pub fn carve_passages<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Grid {
    debug_assert!(rows > 0 && cols > 0);
    let mut grid = Grid::filled(rows, cols, CellState::Wall);
    grid.set(ROOT, CellState::Open);
    let mut stack = vec![ROOT];

    while let Some(&current) = stack.last() {
        let candidates: Vec<Coordinate> = CARVE_STEPS
            .iter()
            .filter_map(|&(dr, dc)| grid.offset(current, dr, dc))
            .filter(|&target| !grid.is_open(target))
            .collect();

        match candidates.choose(rng) {
            Some(&target) => {
                let between = Coordinate::new(
                    (current.r + target.r) / 2,
                    (current.c + target.c) / 2,
                );
                grid.set(between, CellState::Open);
                grid.set(target, CellState::Open);
                stack.push(target);
            }
            None => {
                stack.pop();
            }
        }
    }

    grid
}

/// Forces the bottom-right corner and its top and left neighbours open.
///
/// On even dimensions the carving never lands on the last row or column, so
/// this is what makes the corner reachable. It can leave a short dead end or
/// close a small loop next to the corner; both are expected.
pub fn open_exit_corner(grid: &mut Grid) {
    let (rows, cols) = (grid.rows(), grid.cols());
    grid.set(Coordinate::new(rows - 1, cols - 1), CellState::Open);
    if rows > 1 {
        grid.set(Coordinate::new(rows - 2, cols - 1), CellState::Open);
    }
    if cols > 1 {
        grid.set(Coordinate::new(rows - 1, cols - 2), CellState::Open);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashSet, VecDeque};

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn open_cells(grid: &Grid) -> HashSet<Coordinate> {
        (0..grid.rows())
            .flat_map(|r| (0..grid.cols()).map(move |c| Coordinate::new(r, c)))
            .filter(|&at| grid.is_open(at))
            .collect()
    }

    fn reachable_from_root(grid: &Grid) -> HashSet<Coordinate> {
        let mut seen = HashSet::from([ROOT]);
        let mut queue = VecDeque::from([ROOT]);
        while let Some(current) = queue.pop_front() {
            for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                if let Some(next) = grid.offset(current, dr, dc) {
                    if grid.is_open(next) && seen.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }
        seen
    }

    #[test]
    fn test_output_matches_requested_dimensions() {
        let mut rng = StdRng::seed_from_u64(7);
        for (rows, cols) in [(1, 1), (1, 9), (8, 1), (10, 10), (7, 12), (21, 15)] {
            let grid = generate_maze(rows, cols, &mut rng);
            assert_eq!(grid.rows(), rows);
            assert_eq!(grid.cols(), cols);
            assert!(grid.cells().iter().all(|row| row.len() == cols));
        }
    }

    #[test]
    fn test_corner_is_always_open() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            for (rows, cols) in [(2, 2), (4, 6), (5, 8), (10, 10), (11, 11), (20, 20)] {
                let grid = generate_maze(rows, cols, &mut rng);
                assert!(
                    grid.is_open(Coordinate::new(rows - 1, cols - 1)),
                    "corner closed for {rows}x{cols}, seed {seed}"
                );
            }
        }
    }

    #[test]
    fn test_every_open_cell_is_reachable_from_root() {
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            for (rows, cols) in [(2, 3), (6, 6), (9, 9), (10, 13), (15, 20)] {
                let grid = generate_maze(rows, cols, &mut rng);
                assert_eq!(
                    reachable_from_root(&grid),
                    open_cells(&grid),
                    "unreachable open cell for {rows}x{cols}, seed {seed}"
                );
            }
        }
    }

    #[test]
    fn test_carving_on_odd_dimensions_is_a_spanning_tree() {
        let mut rng = StdRng::seed_from_u64(42);
        let (rows, cols) = (9, 11);
        let grid = carve_passages(rows, cols, &mut rng);

        // 5×6 lattice cells joined by 29 passage cells.
        let nodes = rows.div_ceil(2) * cols.div_ceil(2);
        let open = open_cells(&grid);
        assert_eq!(open.len(), 2 * nodes - 1);
        assert_eq!(reachable_from_root(&grid), open);
    }

    #[test]
    fn test_carving_never_opens_odd_odd_cells() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = carve_passages(12, 14, &mut rng);
        for at in open_cells(&grid) {
            assert!(at.r % 2 == 0 || at.c % 2 == 0, "{at:?} should stay a wall");
        }
    }

    #[test]
    fn test_single_cell_maze() {
        let mut rng = StdRng::seed_from_u64(0);
        let grid = generate_maze(1, 1, &mut rng);
        assert!(grid.is_open(ROOT));
    }

    #[test]
    fn test_single_row_and_column_are_fully_carved() {
        let mut rng = StdRng::seed_from_u64(0);
        let row = generate_maze(1, 6, &mut rng);
        assert_eq!(open_cells(&row).len(), 6);
        let column = generate_maze(5, 1, &mut rng);
        assert_eq!(open_cells(&column).len(), 5);
    }

    #[test]
    fn test_exit_corner_patch_on_even_grid() {
        let mut grid = Grid::filled(4, 4, CellState::Wall);
        open_exit_corner(&mut grid);
        assert_eq!(
            open_cells(&grid),
            HashSet::from([
                Coordinate::new(3, 3),
                Coordinate::new(2, 3),
                Coordinate::new(3, 2)
            ])
        );
    }

    #[test]
    fn test_exit_corner_patch_skips_missing_neighbours() {
        let mut grid = Grid::filled(1, 1, CellState::Wall);
        open_exit_corner(&mut grid);
        assert!(grid.is_open(ROOT));

        let mut grid = Grid::filled(1, 3, CellState::Wall);
        open_exit_corner(&mut grid);
        assert_eq!(
            open_cells(&grid),
            HashSet::from([Coordinate::new(0, 2), Coordinate::new(0, 1)])
        );
    }

    #[test]
    fn test_same_seed_same_maze() {
        let a = generate_maze(21, 21, &mut StdRng::seed_from_u64(1234));
        let b = generate_maze(21, 21, &mut StdRng::seed_from_u64(1234));
        let c = generate_maze(21, 21, &mut StdRng::seed_from_u64(4321));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
