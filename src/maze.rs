//! Perfect maze generation by randomized depth-first carving.
//!
//! Cells at odd coordinates act as rooms. Carving steps two cells at a time between rooms and
//! opens the wall cell in between, so the open cells always form a spanning tree of the rooms
//! reachable from the start.
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

use crate::coord::{Coordinate, NEUMANN_STEPS};
use crate::error::MazeError;
use crate::grid::{Cell, Grid};
use crate::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_CELLS, MIN_SIDE};

/// A generated grid together with its fixed start and goal cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    start: Coordinate,
    goal: Coordinate,
}

impl Maze {
    /// Carves a new maze of the given size using `rng` for every random choice.
    pub fn generate<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Maze, MazeError> {
        check_dimensions(width, height)?;
        let start = Coordinate::new(1, 1);
        let goal = Coordinate::new(width as i32 - 2, height as i32 - 2);
        let mut grid = Grid::new(width, height, Cell::Wall);

        let mut stack = vec![start];
        grid.set(start, Cell::Open);
        while let Some(&current) = stack.last() {
            let candidates = NEUMANN_STEPS
                .iter()
                .map(|step| {
                    let wall = current + *step;
                    (wall + *step, wall)
                })
                .filter(|&(room, _)| grid.in_interior(room) && !grid.is_open(room))
                .collect::<SmallVec<[(Coordinate, Coordinate); 4]>>();
            match candidates.choose(rng) {
                Some(&(room, wall)) => {
                    grid.set(wall, Cell::Open);
                    grid.set(room, Cell::Open);
                    stack.push(room);
                }
                None => {
                    stack.pop();
                }
            }
        }

        grid.set(start, Cell::Open);
        grid.set(goal, Cell::Open);
        // With both sides even the goal sits on a row and column no carve reaches.
        if grid.open_neighbours(&goal).is_empty() {
            grid.set(Coordinate::new(goal.x - 1, goal.y), Cell::Open);
        }
        debug!(
            "Generated {}x{} maze with {} open cells",
            width,
            height,
            grid.open_count()
        );
        Ok(Maze { grid, start, goal })
    }

    /// Wraps an existing grid, forcing `start` and `goal` open. Used for hand-made layouts.
    pub fn from_grid(
        mut grid: Grid,
        start: Coordinate,
        goal: Coordinate,
    ) -> Result<Maze, MazeError> {
        if let Some(&position) = [start, goal].iter().find(|p| !grid.in_bounds(**p)) {
            return Err(MazeError::OutOfBounds {
                position,
                width: grid.width(),
                height: grid.height(),
            });
        }
        grid.set(start, Cell::Open);
        grid.set(goal, Cell::Open);
        Ok(Maze { grid, start, goal })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn start(&self) -> Coordinate {
        self.start
    }
    pub fn goal(&self) -> Coordinate {
        self.goal
    }
    pub fn width(&self) -> usize {
        self.grid.width()
    }
    pub fn height(&self) -> usize {
        self.grid.height()
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<(), MazeError> {
    let cells = width.checked_mul(height).unwrap_or(usize::MAX);
    if width >= MIN_SIDE && height >= MIN_SIDE && cells <= MAX_CELLS {
        Ok(())
    } else {
        Err(MazeError::InvalidDimensions { width, height })
    }
}

/// Size and seed of the mazes a [Session](crate::session::Session) produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeConfig {
    pub width: usize,
    pub height: usize,
    /// Seeds the session's rng. `None` draws a seed from system entropy.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> MazeConfig {
        MazeConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: None,
        }
    }
}

impl MazeConfig {
    pub fn new(width: usize, height: usize) -> MazeConfig {
        MazeConfig {
            width,
            height,
            ..MazeConfig::default()
        }
    }
    pub fn with_seed(mut self, seed: u64) -> MazeConfig {
        self.seed = Some(seed);
        self
    }
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
    pub fn validate(&self) -> Result<(), MazeError> {
        check_dimensions(self.width, self.height)
    }
}
