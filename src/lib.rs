//! # maze_pathfinding
//!
//! Generates perfect mazes on a 4-connected grid by
//! [randomized depth-first carving](https://en.wikipedia.org/wiki/Maze_generation_algorithm#Randomized_depth-first_search)
//! and solves them with [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) using the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic. Besides the
//! path, every search reports the cells it finalized so a front end can show how the search
//! spread. An [Agent] walks the found path one cell per tick.
//!
//! ```
//! use maze_pathfinding::{generate_maze, solve};
//!
//! let maze = generate_maze(21, 15, Some(7)).unwrap();
//! let result = solve(&maze);
//! assert_eq!(result.path.first(), Some(&maze.start()));
//! assert_eq!(result.path.last(), Some(&maze.goal()));
//! ```
pub mod agent;
pub mod coord;
pub mod error;
pub mod grid;
pub mod maze;
pub mod search;
pub mod session;
pub mod solver;

pub use agent::{Agent, AgentState, AgentStatus, Step};
pub use coord::Coordinate;
pub use error::MazeError;
pub use grid::{Cell, Grid};
pub use maze::{Maze, MazeConfig};
pub use session::Session;
pub use solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver, SearchResult};

/// Smallest side length for which start and goal are distinct cells joined by a carved corridor.
pub const MIN_SIDE: usize = 5;
/// Upper bound on `width * height` for generated mazes.
pub const MAX_CELLS: usize = 1 << 24;
pub const DEFAULT_WIDTH: usize = 20;
pub const DEFAULT_HEIGHT: usize = 15;

/// Generates a maze, seeding a [StdRng](rand::rngs::StdRng) from `seed` or from system entropy when it is `None`.
/// The same size and seed always give the same maze.
pub fn generate_maze(width: usize, height: usize, seed: Option<u64>) -> Result<Maze, MazeError> {
    let config = MazeConfig {
        width,
        height,
        seed,
    };
    Maze::generate(width, height, &mut config.rng())
}

/// Finds a shortest path from the maze's start to its goal with [AstarSolver].
pub fn solve(maze: &Maze) -> SearchResult {
    AstarSolver::new().solve(maze.grid(), maze.start(), maze.goal())
}

/// The agent state at the start of `maze`, before any solution is walked.
pub fn reset_agent(maze: &Maze) -> AgentState {
    AgentState::at(maze.start())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_agent_starts_at_maze_start() {
        let maze = generate_maze(9, 9, Some(0)).unwrap();
        let state = reset_agent(&maze);
        assert_eq!(state.position, maze.start());
        assert_eq!(state.path_index, 0);
        assert!(!state.solving);
    }
}
