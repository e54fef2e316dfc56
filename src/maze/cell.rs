#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::maze::grid::Direction;

/// The four walls of a rectilinear cell. `true` means the wall is standing.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walls {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Walls {
    pub const CLOSED: Walls = Walls {
        top: true,
        right: true,
        bottom: true,
        left: true,
    };

    /// Whether the wall facing `dir` is standing.
    pub fn get(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.top,
            Direction::Down => self.bottom,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn set(&mut self, dir: Direction, closed: bool) {
        match dir {
            Direction::Up => self.top = closed,
            Direction::Down => self.bottom = closed,
            Direction::Left => self.left = closed,
            Direction::Right => self.right = closed,
        }
    }

    pub fn is_closed(&self) -> bool {
        *self == Walls::CLOSED
    }
}

impl Default for Walls {
    fn default() -> Self {
        Walls::CLOSED
    }
}

/// A cell of a square or circle-masked maze.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub x: u16,
    pub y: u16,
    pub walls: Walls,
    /// Traversal marker. Masked-out cells are pre-visited.
    pub visited: bool,
    pub is_start: bool,
    pub is_end: bool,
    /// `false` when a shape mask excluded the cell from the maze.
    pub is_active: bool,
}

impl GridCell {
    /// A fully walled, active, unvisited cell.
    pub fn new(x: u16, y: u16) -> Self {
        GridCell {
            x,
            y,
            walls: Walls::CLOSED,
            visited: false,
            is_start: false,
            is_end: false,
            is_active: true,
        }
    }
}

/// A cell of a ring-based (polar or triangular) maze.
///
/// Only two walls are stored per cell. The outward wall of a cell is the
/// `inward` flag of the child on the other side, and its counter-clockwise
/// wall is the `cw` flag of its counter-clockwise neighbour, so every edge has
/// exactly one flag of record.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingCell {
    /// Ring index, 0 is the centre.
    pub r: usize,
    /// Position within the ring.
    pub i: usize,
    /// Wall towards the parent cell on ring `r - 1`.
    pub inward: bool,
    /// Wall towards the clockwise neighbour `(i + 1) mod len`.
    pub cw: bool,
    /// Number of ring `r + 1` cells whose parent is this cell. Zero on the outermost ring.
    pub ratio: usize,
    pub visited: bool,
    pub is_start: bool,
    pub is_end: bool,
}

impl RingCell {
    pub fn new(r: usize, i: usize, ratio: usize) -> Self {
        // The centre has no walls of its own
        let closed = r != 0;
        RingCell {
            r,
            i,
            inward: closed,
            cw: closed,
            ratio,
            visited: false,
            is_start: false,
            is_end: false,
        }
    }
}
