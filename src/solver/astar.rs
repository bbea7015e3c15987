use crate::{coord::Coordinate, solver::GridSolver, solver::STEP_COST};

/// A* with the Manhattan distance as heuristic, which is exact on an empty 4-connected grid and
/// never overestimates otherwise.
#[derive(Clone, Debug, Default)]
pub struct AstarSolver;

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver
    }
}

impl GridSolver for AstarSolver {
    fn heuristic(&self, p1: &Coordinate, p2: &Coordinate) -> u32 {
        p1.manhattan_distance(p2).unsigned_abs() * STEP_COST
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::Grid;

    use super::*;

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let grid: Grid = "###\n#.#\n###".parse().unwrap();
        let start = Coordinate::new(1, 1);
        let result = AstarSolver::new().solve(&grid, start, start);
        assert_eq!(result.path, vec![start]);
        assert_eq!(result.explored.len(), 1);
    }

    /// Asserts that the optimal 4 step solution is found around a single obstacle.
    #[test]
    fn solve_simple_problem() {
        //  ___
        // |S  |
        // | # |
        // |  G|
        //  ___
        let grid: Grid = "...\n.#.\n...".parse().unwrap();
        let result = AstarSolver::new().solve(&grid, Coordinate::new(0, 0), Coordinate::new(2, 2));
        assert_eq!(result.path.len(), 5);
        assert_eq!(result.cost(), Some(4));
        assert!(result.is_contiguous());
    }

    /// Equal-cost routes resolve towards the deeper frontier entry, then the earlier push.
    #[test]
    fn tie_break_prefers_right_then_down() {
        let grid: Grid = "#####\n#...#\n#.#.#\n#...#\n#####".parse().unwrap();
        let result = AstarSolver::new().solve(&grid, Coordinate::new(1, 1), Coordinate::new(3, 3));
        assert_eq!(
            result.path,
            vec![
                Coordinate::new(1, 1),
                Coordinate::new(2, 1),
                Coordinate::new(3, 1),
                Coordinate::new(3, 2),
                Coordinate::new(3, 3),
            ]
        );
        assert_eq!(
            result.explored.iter().copied().collect::<Vec<_>>(),
            result.path
        );
    }

    /// Endpoints on a wall or off the grid never start or end a path.
    #[test]
    fn blocked_endpoints_give_empty_result() {
        let grid: Grid = "#####\n#...#\n#####".parse().unwrap();
        let solver = AstarSolver::new();
        for (start, goal) in [
            (Coordinate::new(0, 1), Coordinate::new(3, 1)),
            (Coordinate::new(1, 1), Coordinate::new(4, 1)),
            (Coordinate::new(-1, 1), Coordinate::new(3, 1)),
        ] {
            let result = solver.solve(&grid, start, goal);
            assert!(!result.is_solved(), "path from {} to {}", start, goal);
            assert!(result.explored.is_empty());
        }
    }

    #[test]
    fn walled_off_goal_gives_empty_path() {
        //  #######
        // |S..#..G|
        //  #######
        let grid: Grid = "#######\n#..#..#\n#######".parse().unwrap();
        let result = AstarSolver::new().solve(&grid, Coordinate::new(1, 1), Coordinate::new(5, 1));
        assert!(!result.is_solved());
        assert_eq!(result.explored.len(), 2);
    }
}
