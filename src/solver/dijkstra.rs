use crate::{coord::Coordinate, solver::GridSolver};

/// Uniform-cost search: A* with a zero heuristic.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn heuristic(&self, _: &Coordinate, _: &Coordinate) -> u32 {
        0
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::Grid;
    use crate::solver::astar::AstarSolver;

    use super::*;

    #[test]
    fn explores_at_least_as_much_as_astar() {
        let grid: Grid = "#######\n#.....#\n#.###.#\n#.....#\n#######".parse().unwrap();
        let start = Coordinate::new(1, 1);
        let goal = Coordinate::new(5, 3);
        let dijkstra = DijkstraSolver.solve(&grid, start, goal);
        let astar = AstarSolver::new().solve(&grid, start, goal);
        assert_eq!(dijkstra.cost(), Some(6));
        assert_eq!(dijkstra.cost(), astar.cost());
        assert!(dijkstra.explored.len() >= astar.explored.len());
    }
}
