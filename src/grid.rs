use core::fmt;
use std::str::FromStr;

use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::coord::Coordinate;
use crate::error::MazeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Open,
    Wall,
}

impl Cell {
    pub fn is_open(self) -> bool {
        self == Cell::Open
    }
    fn symbol(self) -> char {
        match self {
            Cell::Open => '.',
            Cell::Wall => '#',
        }
    }
}

/// Row-major `width × height` array of [Cell]s.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize, fill: Cell) -> Grid {
        Grid {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn in_bounds(&self, pos: Coordinate) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height
    }
    /// Whether `pos` lies strictly inside the outer border.
    pub fn in_interior(&self, pos: Coordinate) -> bool {
        pos.x > 0
            && pos.y > 0
            && (pos.x as usize) < self.width.saturating_sub(1)
            && (pos.y as usize) < self.height.saturating_sub(1)
    }
    fn get_ix(&self, pos: Coordinate) -> usize {
        pos.y as usize * self.width + pos.x as usize
    }
    /// Cells outside the grid read as [Cell::Wall].
    pub fn get(&self, pos: Coordinate) -> Cell {
        if self.in_bounds(pos) {
            self.cells[self.get_ix(pos)]
        } else {
            Cell::Wall
        }
    }
    /// Panics if `pos` is out of bounds.
    pub fn set(&mut self, pos: Coordinate, cell: Cell) {
        assert!(self.in_bounds(pos), "{} is outside the grid", pos);
        let ix = self.get_ix(pos);
        self.cells[ix] = cell;
    }
    pub fn is_open(&self, pos: Coordinate) -> bool {
        self.get(pos).is_open()
    }
    /// In-bounds open 4-neighbours of `pos`, in right, down, left, up order.
    pub fn open_neighbours(&self, pos: &Coordinate) -> SmallVec<[Coordinate; 4]> {
        pos.neumann_neighborhood()
            .into_iter()
            .filter(|p| self.is_open(*p))
            .collect()
    }
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| Coordinate::new(x, y)))
    }
    pub fn open_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.coordinates().filter(move |p| self.is_open(*p))
    }
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_open()).count()
    }

    /// Builds a [UnionFind] linking every open cell to its open right and down neighbours.
    pub fn generate_components(&self) -> UnionFind<usize> {
        let mut components = UnionFind::new(self.cells.len());
        for point in self.open_cells() {
            let parent_ix = self.get_ix(point);
            [
                Coordinate::new(point.x + 1, point.y),
                Coordinate::new(point.x, point.y + 1),
            ]
            .into_iter()
            .filter(|p| self.is_open(*p))
            .for_each(|p| {
                components.union(parent_ix, self.get_ix(p));
            });
        }
        components
    }
    /// Checks if both cells are open and on the same connected component.
    pub fn reachable(&self, start: &Coordinate, goal: &Coordinate) -> bool {
        if !self.is_open(*start) || !self.is_open(*goal) {
            return false;
        }
        let components = self.generate_components();
        components.equiv(self.get_ix(*start), self.get_ix(*goal))
    }
    /// Number of connected components formed by the open cells.
    pub fn component_count(&self) -> usize {
        let components = self.generate_components();
        let mut roots = self
            .open_cells()
            .map(|p| components.find(self.get_ix(p)))
            .collect::<Vec<_>>();
        roots.sort_unstable();
        roots.dedup();
        roots.len()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            let line = row.iter().map(|c| c.symbol()).collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Parses rows of `#` (wall) and `.` (open). Blank lines and surrounding whitespace are ignored.
impl FromStr for Grid {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Grid, MazeError> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(MazeError::ParseGrid(format!(
                    "row {} has {} cells, expected {}",
                    y,
                    row.chars().count(),
                    width
                )));
            }
            for (x, c) in row.chars().enumerate() {
                cells.push(match c {
                    '.' => Cell::Open,
                    '#' => Cell::Wall,
                    other => {
                        return Err(MazeError::ParseGrid(format!(
                            "unexpected character {:?} at ({}, {})",
                            other, x, y
                        )))
                    }
                });
            }
        }
        Ok(Grid {
            width,
            height: rows.len(),
            cells,
        })
    }
}
