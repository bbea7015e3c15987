//! Agent that walks a solved path one cell per tick.
use core::fmt;

use crate::coord::Coordinate;
use crate::search::FxIndexSet;
use crate::solver::SearchResult;

/// Progress of the agent along its current solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgentState {
    pub position: Coordinate,
    /// Index of the next path entry to step onto.
    pub path_index: usize,
    pub solving: bool,
}

impl AgentState {
    pub fn at(start: Coordinate) -> AgentState {
        AgentState {
            position: start,
            path_index: 0,
            solving: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Moved(Coordinate),
    /// The path is used up (or empty); the agent stays where it is.
    Idle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentStatus {
    Moving,
    Solved,
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AgentStatus::Moving => write!(f, "Moving"),
            AgentStatus::Solved => write!(f, "Solved"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Agent {
    start: Coordinate,
    state: AgentState,
    solution: Vec<Coordinate>,
    /// Cells shown as explored: the search's finalized cells plus every cell walked since.
    explored: FxIndexSet<Coordinate>,
}

impl Agent {
    pub fn new(start: Coordinate) -> Agent {
        Agent {
            start,
            state: AgentState::at(start),
            solution: Vec::new(),
            explored: FxIndexSet::default(),
        }
    }

    /// Back to the start with no solution loaded.
    pub fn reset(&mut self) -> AgentState {
        self.state = AgentState::at(self.start);
        self.solution.clear();
        self.explored.clear();
        self.state
    }

    /// Resets, then loads `result` to be walked by subsequent [step](Self::step) calls.
    pub fn begin(&mut self, result: &SearchResult) {
        self.reset();
        self.solution = result.path.clone();
        self.explored = result.explored.clone();
        self.state.solving = true;
    }

    pub fn step(&mut self) -> Step {
        match self.solution.get(self.state.path_index) {
            Some(&next) => {
                self.state.position = next;
                self.explored.insert(next);
                self.state.path_index += 1;
                Step::Moved(next)
            }
            None => {
                self.state.solving = false;
                Step::Idle
            }
        }
    }

    pub fn status(&self) -> AgentStatus {
        if self.state.path_index < self.solution.len() {
            AgentStatus::Moving
        } else {
            AgentStatus::Solved
        }
    }
    pub fn state(&self) -> AgentState {
        self.state
    }
    pub fn position(&self) -> Coordinate {
        self.state.position
    }
    pub fn steps_taken(&self) -> usize {
        self.state.path_index
    }
    pub fn solution(&self) -> &[Coordinate] {
        &self.solution
    }
    pub fn explored(&self) -> &FxIndexSet<Coordinate> {
        &self.explored
    }
}
