//! Goal placement on top of a generated maze.
//!
//! The generator only reports the farthest cell. Where an easier goal goes is
//! a decision for whoever presents the maze; this module holds the placement
//! the bundled CLI and sessions use.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::maze::{Coord, Layout, MazeResult};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// Goal at a fixed, easy-to-find spot on the outer edge.
    #[default]
    Easy,
    /// Goal at the cell farthest from the start along the maze.
    Hard,
}

/// Picks the goal cell for `difficulty`.
///
/// Easy goals sit at the bottom-right corner of a square, the last active
/// cell (row-major) of a circle, and the middle cell of the outermost ring of
/// a radial maze.
pub fn select_goal(maze: &MazeResult, difficulty: Difficulty) -> Coord {
    match difficulty {
        Difficulty::Hard => maze.end(),
        Difficulty::Easy => easy_goal(maze),
    }
}

fn easy_goal(maze: &MazeResult) -> Coord {
    match maze.layout() {
        Layout::Grid(grid) => grid
            .cells()
            .iter()
            .rev()
            .find(|cell| cell.is_active)
            .map_or(maze.end(), |cell| Coord::grid(cell.x, cell.y)),
        Layout::Rings(rings) => match rings.len().checked_sub(1) {
            Some(outer) => Coord::ring(outer, rings.ring_len(outer) / 2),
            None => maze.end(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generators::generate_maze, maze::Shape};

    #[test]
    fn test_hard_goal_is_farthest_cell() {
        for shape in Shape::ALL {
            let maze = generate_maze(12, shape, Some(4));
            assert_eq!(select_goal(&maze, Difficulty::Hard), maze.end());
        }
    }

    #[test]
    fn test_easy_square_goal_is_bottom_right() {
        let maze = generate_maze(10, Shape::Square, Some(0));
        assert_eq!(select_goal(&maze, Difficulty::Easy), Coord::grid(9, 9));
    }

    #[test]
    fn test_easy_circle_goal_is_active() {
        let maze = generate_maze(20, Shape::Circle, Some(0));
        let goal = select_goal(&maze, Difficulty::Easy);
        assert!(maze.layout().contains(goal));
        let Coord::Grid(p) = goal else {
            panic!("circle goal must be a grid point");
        };
        assert!(p.y > 15);
    }

    #[test]
    fn test_easy_radial_goal_on_outer_ring() {
        let maze = generate_maze(5, Shape::Polar, Some(0));
        let rings = maze.rings().unwrap();
        let outer = rings.len() - 1;
        assert_eq!(
            select_goal(&maze, Difficulty::Easy),
            Coord::ring(outer, rings.ring_len(outer) / 2)
        );
    }

    #[test]
    fn test_single_cell_goals() {
        for shape in Shape::ALL {
            let maze = generate_maze(1, shape, Some(0));
            assert_eq!(select_goal(&maze, Difficulty::Easy), maze.start());
            assert_eq!(select_goal(&maze, Difficulty::Hard), maze.start());
        }
    }
}
