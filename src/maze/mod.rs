pub mod cell;
pub mod grid;
pub mod rings;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use cell::{GridCell, RingCell, Walls};
pub use grid::{Direction, Grid};
pub use rings::{Rings, ring_cell_counts};

/// Outline of a maze.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    #[default]
    Square,
    Circle,
    Triangle,
    Polar,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Shape::Square, Shape::Circle, Shape::Triangle, Shape::Polar];

    pub fn name(self) -> &'static str {
        match self {
            Shape::Square => "square",
            Shape::Circle => "circle",
            Shape::Triangle => "triangle",
            Shape::Polar => "polar",
        }
    }

    /// Coordinate scheme a maze of this shape is generated in.
    pub fn kind(self) -> MazeKind {
        match self {
            Shape::Square | Shape::Circle => MazeKind::Grid,
            Shape::Triangle | Shape::Polar => MazeKind::Polar,
        }
    }

    /// Per-ring growth of the radial layouts: one group per triangle side, or
    /// six for roughly even angular spacing on a circle.
    pub fn side_multiplier(self) -> Option<usize> {
        match self {
            Shape::Triangle => Some(3),
            Shape::Polar => Some(6),
            Shape::Square | Shape::Circle => None,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Unrecognised names fall back to [`Shape::Square`].
impl From<&str> for Shape {
    fn from(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "circle" => Shape::Circle,
            "triangle" => Shape::Triangle,
            "polar" => Shape::Polar,
            _ => Shape::Square,
        }
    }
}

/// Which coordinate scheme the points of a maze use.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MazeKind {
    /// `(x, y)` cells of a [`Grid`].
    Grid,
    /// `(r, i)` cells of [`Rings`].
    Polar,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub x: u16,
    pub y: u16,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RingPoint {
    pub r: usize,
    pub i: usize,
}

/// A cell address in either coordinate scheme.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coord {
    Grid(GridPoint),
    Ring(RingPoint),
}

impl Coord {
    pub fn grid(x: u16, y: u16) -> Self {
        Coord::Grid(GridPoint { x, y })
    }

    pub fn ring(r: usize, i: usize) -> Self {
        Coord::Ring(RingPoint { r, i })
    }

    pub fn kind(&self) -> MazeKind {
        match self {
            Coord::Grid(_) => MazeKind::Grid,
            Coord::Ring(_) => MazeKind::Polar,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coord::Grid(p) => write!(f, "(x={}, y={})", p.x, p.y),
            Coord::Ring(p) => write!(f, "(r={}, i={})", p.r, p.i),
        }
    }
}

/// The cell graph of a generated maze.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    Grid(Grid),
    Rings(Rings),
}

impl Layout {
    /// Rows of the grid, or rings of a radial layout.
    pub fn len(&self) -> usize {
        match self {
            Layout::Grid(grid) => grid.size() as usize,
            Layout::Rings(rings) => rings.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> MazeKind {
        match self {
            Layout::Grid(_) => MazeKind::Grid,
            Layout::Rings(_) => MazeKind::Polar,
        }
    }

    /// Whether `coord` names a cell that belongs to the maze.
    pub fn contains(&self, coord: Coord) -> bool {
        match (self, coord) {
            (Layout::Grid(grid), Coord::Grid(p)) => {
                grid.get((p.x, p.y)).is_some_and(|cell| cell.is_active)
            }
            (Layout::Rings(rings), Coord::Ring(p)) => rings.get((p.r, p.i)).is_some(),
            _ => false,
        }
    }
}

/// Output of one generation call.
///
/// Built once by the generators and never modified afterwards; a new maze
/// replaces it wholesale.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeResult {
    layout: Layout,
    start: Coord,
    end: Coord,
    max_distance: usize,
    shape: Shape,
}

impl MazeResult {
    pub(crate) fn new(
        layout: Layout,
        start: Coord,
        end: Coord,
        max_distance: usize,
        shape: Shape,
    ) -> Self {
        MazeResult {
            layout,
            start,
            end,
            max_distance,
            shape,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[cfg(test)]
    /// Mutable layout access so tests can corrupt a finished maze.
    pub(crate) fn layout_mut(&mut self) -> &mut Layout {
        &mut self.layout
    }

    pub fn grid(&self) -> Option<&Grid> {
        match &self.layout {
            Layout::Grid(grid) => Some(grid),
            Layout::Rings(_) => None,
        }
    }

    pub fn rings(&self) -> Option<&Rings> {
        match &self.layout {
            Layout::Rings(rings) => Some(rings),
            Layout::Grid(_) => None,
        }
    }

    /// Root of the carve.
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Farthest cell from the start along the carved tree.
    pub fn end(&self) -> Coord {
        self.end
    }

    /// Deepest stack reached while carving, counted in cells (the start alone is 1).
    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn kind(&self) -> MazeKind {
        self.layout.kind()
    }

    /// Grid side length or ring count.
    pub fn size(&self) -> usize {
        self.layout.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_parsing_defaults_to_square() {
        assert_eq!(Shape::from("circle"), Shape::Circle);
        assert_eq!(Shape::from(" Polar "), Shape::Polar);
        assert_eq!(Shape::from("TRIANGLE"), Shape::Triangle);
        assert_eq!(Shape::from("hexagon"), Shape::Square);
        assert_eq!(Shape::from(""), Shape::Square);
    }

    #[test]
    fn test_shape_kinds() {
        assert_eq!(Shape::Square.kind(), MazeKind::Grid);
        assert_eq!(Shape::Circle.kind(), MazeKind::Grid);
        assert_eq!(Shape::Triangle.kind(), MazeKind::Polar);
        assert_eq!(Shape::Polar.side_multiplier(), Some(6));
        assert_eq!(Shape::Circle.side_multiplier(), None);
    }

    #[test]
    fn test_layout_contains() {
        let mut grid = Grid::new(3);
        grid[(0, 0)].is_active = false;
        let layout = Layout::Grid(grid);
        assert!(!layout.contains(Coord::grid(0, 0)));
        assert!(layout.contains(Coord::grid(2, 2)));
        assert!(!layout.contains(Coord::grid(3, 0)));
        assert!(!layout.contains(Coord::ring(0, 0)));
    }
}
