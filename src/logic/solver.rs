use std::collections::{HashMap, VecDeque};

use crate::models::{grid::Grid, request::SolveResult, Coordinate};

/// Neighbour expansion order: up, down, left, right. Fixed so results are reproducible.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Breadth-first search from `start` to `end` over 4-connected open cells.
///
/// Both endpoints must be in bounds and open; callers validate this first.
/// The returned path is a shortest one by cell count, and `visited_order`
/// holds cells in dequeue order whether or not `end` was reached.
pub fn solve_maze(grid: &Grid, start: Coordinate, end: Coordinate) -> SolveResult {
    let mut visited = vec![vec![false; grid.cols()]; grid.rows()];
    let mut predecessors: HashMap<Coordinate, Coordinate> = HashMap::new();
    let mut visited_order = Vec::new();
    let mut queue = VecDeque::from([start]);
    visited[start.r][start.c] = true;

    let mut found = false;
    while let Some(current) = queue.pop_front() {
        visited_order.push(current);
        if current == end {
            found = true;
            break;
        }

        for (dr, dc) in DIRECTIONS {
            let Some(next) = grid.offset(current, dr, dc) else {
                continue;
            };
            if grid.is_open(next) && !visited[next.r][next.c] {
                visited[next.r][next.c] = true;
                predecessors.insert(next, current);
                queue.push_back(next);
            }
        }
    }

    let path = if found {
        reconstruct_path(&predecessors, start, end)
    } else {
        Vec::new()
    };

    SolveResult {
        found,
        visited_order,
        path,
    }
}

/// Walks predecessors back from `end` and returns the path in start→end order.
fn reconstruct_path(
    predecessors: &HashMap<Coordinate, Coordinate>,
    start: Coordinate,
    end: Coordinate,
) -> Vec<Coordinate> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        match predecessors.get(&current) {
            Some(&previous) => {
                path.push(previous);
                current = previous;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
