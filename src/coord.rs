use core::fmt;
use std::ops::Add;

use smallvec::SmallVec;

/// Axis steps in the order neighbours are visited: right, down, left, up.
pub const NEUMANN_STEPS: [Coordinate; 4] = [
    Coordinate::new(1, 0),
    Coordinate::new(0, 1),
    Coordinate::new(-1, 0),
    Coordinate::new(0, -1),
];

/// A cell position on the grid. `x` grows to the right, `y` grows downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Coordinate {
        Coordinate { x, y }
    }

    pub fn manhattan_distance(&self, other: &Coordinate) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// The four axis-aligned neighbours, in [NEUMANN_STEPS] order. Bounds are not checked.
    pub fn neumann_neighborhood(&self) -> SmallVec<[Coordinate; 4]> {
        NEUMANN_STEPS.iter().map(|&step| *self + step).collect()
    }

    /// Whether `other` is exactly one axis step away.
    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Coordinate {
        Coordinate::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
