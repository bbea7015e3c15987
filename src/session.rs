use log::info;
use rand::rngs::StdRng;

use crate::agent::{Agent, Step};
use crate::error::MazeError;
use crate::maze::{Maze, MazeConfig};
use crate::solver::SearchResult;

/// One maze and the agent walking it, driven by the requests a front end issues:
/// new maze, solve, reset and one tick per animation frame.
#[derive(Clone, Debug)]
pub struct Session {
    config: MazeConfig,
    rng: StdRng,
    maze: Maze,
    agent: Agent,
    result: Option<SearchResult>,
}

impl Session {
    pub fn new(config: MazeConfig) -> Result<Session, MazeError> {
        config.validate()?;
        let mut rng = config.rng();
        let maze = Maze::generate(config.width, config.height, &mut rng)?;
        info!("Session started with a {}x{} maze", config.width, config.height);
        Ok(Session {
            config,
            rng,
            agent: Agent::new(maze.start()),
            maze,
            result: None,
        })
    }

    /// Replaces maze and agent. The current maze is kept if generation fails.
    pub fn new_maze(&mut self) -> Result<&Maze, MazeError> {
        let maze = Maze::generate(self.config.width, self.config.height, &mut self.rng)?;
        info!("New {}x{} maze", maze.width(), maze.height());
        self.agent = Agent::new(maze.start());
        self.maze = maze;
        self.result = None;
        Ok(&self.maze)
    }

    /// Searches the current maze and restarts the agent on the new solution.
    pub fn solve(&mut self) -> &SearchResult {
        let result = crate::solve(&self.maze);
        info!(
            "Solved maze: path length {}, explored {} cells",
            result.path.len(),
            result.explored.len()
        );
        self.agent.begin(&result);
        self.result.insert(result)
    }

    pub fn reset(&mut self) {
        self.agent.reset();
        self.result = None;
    }

    pub fn tick(&mut self) -> Step {
        self.agent.step()
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }
    pub fn agent(&self) -> &Agent {
        &self.agent
    }
    pub fn result(&self) -> Option<&SearchResult> {
        self.result.as_ref()
    }
}
