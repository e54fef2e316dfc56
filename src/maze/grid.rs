#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::cell::GridCell;

/// Absolute direction from a rectilinear cell to one of its four neighbours.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// One step from `coord` in this direction.
    // NOTE: Stepping below zero wraps to u16::MAX and stepping past u16::MAX saturates,
    // both of which land outside any grid since the largest valid index is u16::MAX - 1.
    fn step(self, (x, y): (u16, u16)) -> (u16, u16) {
        match self {
            Direction::Up => (x, y.wrapping_sub(1)),
            Direction::Down => (x, y.saturating_add(1)),
            Direction::Left => (x.wrapping_sub(1), y),
            Direction::Right => (x.saturating_add(1), y),
        }
    }
}

/// Square block of cells, `size` per side, stored row-major.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Box<[GridCell]>,
    size: u16,
}

impl Grid {
    /// Creates a grid with every wall standing and every cell active.
    pub fn new(size: u16) -> Self {
        let cells = (0..size)
            .flat_map(|y| (0..size).map(move |x| GridCell::new(x, y)))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Grid { cells, size }
    }

    pub fn size(&self) -> u16 {
        self.size
    }

    pub fn is_in_bounds(&self, coord: (u16, u16)) -> bool {
        coord.0 < self.size && coord.1 < self.size
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        y as usize * self.size as usize + x as usize
    }

    pub fn get(&self, coord: (u16, u16)) -> Option<&GridCell> {
        if self.is_in_bounds(coord) {
            self.cells.get(self.ravel_index(coord.0, coord.1))
        } else {
            None
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [GridCell] {
        &mut self.cells
    }

    /// The in-bounds neighbour of `coord` in direction `dir`, if any.
    pub fn neighbor(&self, coord: (u16, u16), dir: Direction) -> Option<(u16, u16)> {
        let next = dir.step(coord);
        (self.is_in_bounds(coord) && self.is_in_bounds(next)).then_some(next)
    }

    /// First active cell in row-major order.
    pub fn first_active(&self) -> Option<(u16, u16)> {
        self.cells
            .iter()
            .find(|cell| cell.is_active)
            .map(|cell| (cell.x, cell.y))
    }

    /// Knocks down the wall between `from` and its neighbour in `dir`, on both sides.
    ///
    /// # Returns
    /// `true` if a wall was removed, `false` if the neighbour is out of bounds or
    /// the passage was already open.
    pub fn remove_wall(&mut self, from: (u16, u16), dir: Direction) -> bool {
        let Some(to) = self.neighbor(from, dir) else {
            return false;
        };
        if !self[from].walls.get(dir) {
            return false;
        }
        self[from].walls.set(dir, false);
        self[to].walls.set(dir.opposite(), false);
        true
    }

    /// Checks that the cell storage matches `size` and that every cell sits at
    /// the position its coordinates claim. Restored grids must pass this before
    /// they can be indexed safely.
    pub fn is_well_formed(&self) -> bool {
        let size = self.size as usize;
        self.cells.len() == size * size
            && self
                .cells
                .iter()
                .enumerate()
                .all(|(idx, cell)| cell.x as usize == idx % size && cell.y as usize == idx / size)
    }

    /// Whether every shared edge has matching wall flags on both sides.
    pub fn has_symmetric_walls(&self) -> bool {
        self.cells.iter().all(|cell| {
            [Direction::Right, Direction::Down].into_iter().all(|dir| {
                match self.neighbor((cell.x, cell.y), dir) {
                    Some(next) => cell.walls.get(dir) == self[next].walls.get(dir.opposite()),
                    None => true,
                }
            })
        })
    }
}

impl std::ops::Index<(u16, u16)> for Grid {
    type Output = GridCell;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.cells[self.ravel_index(index.0, index.1)]
    }
}

impl std::ops::IndexMut<(u16, u16)> for Grid {
    fn index_mut(&mut self, index: (u16, u16)) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.cells[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_indexing() {
        let mut grid = Grid::new(5);
        grid[(2, 3)].is_start = true;
        assert!(grid[(2, 3)].is_start);
        assert_eq!((grid[(2, 3)].x, grid[(2, 3)].y), (2, 3));
        assert!(grid.is_well_formed());
    }

    #[test]
    fn test_remove_wall() {
        let mut grid = Grid::new(5);
        assert!(grid.remove_wall((1, 1), Direction::Right));
        // Trying to remove the same wall again should return false
        assert!(!grid.remove_wall((1, 1), Direction::Right));
        assert!(!grid.remove_wall((2, 1), Direction::Left));
        assert!(!grid[(1, 1)].walls.right);
        assert!(!grid[(2, 1)].walls.left);
        assert!(grid.has_symmetric_walls());
    }

    #[test]
    fn test_boundary_walls_cannot_be_removed() {
        let mut grid = Grid::new(3);
        assert!(!grid.remove_wall((0, 0), Direction::Up));
        assert!(!grid.remove_wall((0, 0), Direction::Left));
        assert!(!grid.remove_wall((2, 2), Direction::Down));
        assert!(grid[(0, 0)].walls.is_closed());
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = Grid::new(5);
        assert!(!grid.is_in_bounds((5, 5)));
        assert!(!grid.is_in_bounds((0, 5)));
        assert!(!grid.is_in_bounds((5, 0)));
        assert!(grid.is_in_bounds((4, 4)));
        assert_eq!(grid.neighbor((0, 0), Direction::Left), None);
        assert_eq!(grid.neighbor((4, 4), Direction::Down), None);
        assert_eq!(grid.neighbor((4, 3), Direction::Down), Some((4, 4)));
    }

    #[test]
    fn test_asymmetric_walls_detected() {
        let mut grid = Grid::new(2);
        grid[(0, 0)].walls.right = false;
        assert!(!grid.has_symmetric_walls());
    }
}
