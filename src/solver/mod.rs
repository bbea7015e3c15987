use itertools::Itertools;
use log::debug;
use smallvec::SmallVec;

use crate::coord::Coordinate;
use crate::grid::Grid;
use crate::search::{astar, FxIndexSet};

pub mod astar;
pub mod dijkstra;

/// Cost of a single step between 4-connected cells.
pub const STEP_COST: u32 = 1;

/// The path found by a solver and every cell whose distance was finalized on the way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// From start to goal inclusive. Empty if the goal is unreachable.
    pub path: Vec<Coordinate>,
    /// Finalized cells in the order the search finalized them.
    pub explored: FxIndexSet<Coordinate>,
}

impl SearchResult {
    pub fn is_solved(&self) -> bool {
        !self.path.is_empty()
    }
    /// Number of steps along the path, `None` when there is no path.
    pub fn cost(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
    /// Whether consecutive path entries are exactly one axis step apart.
    pub fn is_contiguous(&self) -> bool {
        self.path
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.is_adjacent(b))
    }
}

pub trait GridSolver {
    fn heuristic(&self, p1: &Coordinate, p2: &Coordinate) -> u32;

    fn successors(&self, grid: &Grid, node: &Coordinate) -> SmallVec<[(Coordinate, u32); 4]> {
        grid.open_neighbours(node)
            .into_iter()
            .map(|p| (p, STEP_COST))
            .collect()
    }

    /// Searches a path over the open cells of `grid`. `start` and `goal` are expected to be open;
    /// if they are not the result simply carries an empty path.
    fn solve(&self, grid: &Grid, start: Coordinate, goal: Coordinate) -> SearchResult {
        if !grid.is_open(start) || !grid.is_open(goal) {
            debug!("Search from {} to {} skipped: an endpoint is not open", start, goal);
            return SearchResult::default();
        }
        let outcome = astar(
            &start,
            |node| self.successors(grid, node),
            |point| self.heuristic(point, &goal),
            |point| *point == goal,
        );
        debug!(
            "Search from {} to {} finalized {} cells, path length {}",
            start,
            goal,
            outcome.explored.len(),
            outcome.path.len()
        );
        SearchResult {
            path: outcome.path,
            explored: outcome.explored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_and_contiguity() {
        let mut result = SearchResult::default();
        assert!(!result.is_solved());
        assert_eq!(result.cost(), None);
        assert!(result.is_contiguous());
        result.path = vec![Coordinate::new(1, 1), Coordinate::new(2, 1)];
        assert_eq!(result.cost(), Some(1));
        assert!(result.is_contiguous());
        result.path.push(Coordinate::new(3, 2));
        assert!(!result.is_contiguous());
    }
}
