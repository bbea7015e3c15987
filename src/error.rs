use thiserror::Error;

use crate::coord::Coordinate;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// The requested size cannot hold a maze with distinct, carvable start and goal cells.
    #[error("invalid maze dimensions {width}x{height} (each side at least {min}, at most {max} cells in total)", min = crate::MIN_SIDE, max = crate::MAX_CELLS)]
    InvalidDimensions { width: usize, height: usize },
    #[error("{position} lies outside the {width}x{height} grid")]
    OutOfBounds {
        position: Coordinate,
        width: usize,
        height: usize,
    },
    #[error("could not parse grid: {0}")]
    ParseGrid(String),
}
