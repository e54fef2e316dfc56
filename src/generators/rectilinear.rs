use rand::Rng;

use crate::{
    generators::carve::{Carve, carve_spanning_tree},
    mask::apply_mask,
    maze::{Coord, Direction, Grid, Layout, MazeResult, Shape},
};

impl Carve for Grid {
    type Node = (u16, u16);
    type Edge = Direction;

    fn mark_visited(&mut self, node: (u16, u16)) {
        self[node].visited = true;
    }

    fn candidates(&self, node: (u16, u16), out: &mut Vec<((u16, u16), Direction)>) {
        out.extend(Direction::ALL.into_iter().filter_map(|dir| {
            self.neighbor(node, dir)
                .filter(|&next| self[next].is_active && !self[next].visited)
                .map(|next| (next, dir))
        }));
    }

    fn open(&mut self, from: (u16, u16), _to: (u16, u16), dir: Direction) {
        self.remove_wall(from, dir);
    }
}

/// Carves a `size × size` maze, masked to a circle when `shape` is [`Shape::Circle`].
///
/// Any shape other than `Circle` produces a plain square. A `size` of zero is
/// treated as one. If the mask leaves no active cell the maze is generated
/// unmasked instead.
pub fn generate_grid<R: Rng>(size: u16, shape: Shape, rng: &mut R) -> MazeResult {
    let size = size.max(1);
    let shape = match shape {
        Shape::Circle => Shape::Circle,
        _ => Shape::Square,
    };

    let mut grid = Grid::new(size);
    if shape == Shape::Circle {
        apply_mask(&mut grid, shape);
    }

    let Some(root) = grid.first_active() else {
        tracing::warn!(
            "[generate] {} mask left no active cells at size {}, generating an unmasked square",
            shape,
            size
        );
        return generate_grid(size, Shape::Square, rng);
    };

    let farthest = carve_spanning_tree(&mut grid, root, rng);
    grid[root].is_start = true;
    grid[farthest.node].is_end = true;

    tracing::debug!(
        "[generate] {} {}x{}: start {:?}, end {:?}, max distance {}",
        shape,
        size,
        size,
        root,
        farthest.node,
        farthest.depth
    );

    MazeResult::new(
        Layout::Grid(grid),
        Coord::grid(root.0, root.1),
        Coord::grid(farthest.node.0, farthest.node.1),
        farthest.depth,
        shape,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{active_cells, carved_edges, distances_from_start, is_perfect};
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_single_cell_square() {
        let mut rng = StdRng::seed_from_u64(0);
        let maze = generate_grid(1, Shape::Square, &mut rng);
        let grid = maze.grid().unwrap();
        assert_eq!(grid.cells().len(), 1);
        assert!(grid[(0, 0)].is_start && grid[(0, 0)].is_end);
        assert!(grid[(0, 0)].walls.is_closed());
        assert_eq!(maze.start(), maze.end());
        assert_eq!(maze.max_distance(), 1);
    }

    #[test]
    fn test_ten_by_ten_square() {
        let mut rng = StdRng::seed_from_u64(42);
        let maze = generate_grid(10, Shape::Square, &mut rng);
        assert_eq!(maze.start(), Coord::grid(0, 0));
        assert_eq!(active_cells(&maze), 100);
        assert_eq!(carved_edges(&maze), 99);
        assert!(is_perfect(&maze));
        assert!((1..=100).contains(&maze.max_distance()));
        assert!(maze.grid().unwrap().has_symmetric_walls());
    }

    #[test]
    fn test_end_is_deepest_cell() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let maze = generate_grid(15, Shape::Square, &mut rng);
            let distances = distances_from_start(&maze);
            let deepest = distances.values().copied().max().unwrap();
            assert_eq!(maze.max_distance(), deepest + 1);
            assert_eq!(distances[&maze.end()], deepest);
        }
    }

    #[test]
    fn test_circle_carves_only_active_cells() {
        let mut rng = StdRng::seed_from_u64(3);
        let maze = generate_grid(21, Shape::Circle, &mut rng);
        assert_eq!(maze.shape(), Shape::Circle);
        let grid = maze.grid().unwrap();
        assert!(
            grid.cells()
                .iter()
                .filter(|c| !c.is_active)
                .all(|c| c.walls.is_closed() && !c.is_start && !c.is_end)
        );
        assert_eq!(carved_edges(&maze), active_cells(&maze) - 1);
        assert!(is_perfect(&maze));
        // The root is the first active cell in row-major order
        let Coord::Grid(start) = maze.start() else {
            panic!("grid maze must start on a grid point");
        };
        assert_eq!(grid.first_active(), Some((start.x, start.y)));
    }

    #[test]
    fn test_degenerate_circle_falls_back_to_square() {
        let mut rng = StdRng::seed_from_u64(0);
        let maze = generate_grid(2, Shape::Circle, &mut rng);
        assert_eq!(maze.shape(), Shape::Square);
        assert_eq!(active_cells(&maze), 4);
        assert!(is_perfect(&maze));
    }

    #[test]
    fn test_triangle_is_not_masked() {
        let mut rng = StdRng::seed_from_u64(0);
        let maze = generate_grid(6, Shape::Triangle, &mut rng);
        assert_eq!(maze.shape(), Shape::Square);
        assert_eq!(active_cells(&maze), 36);
    }

    #[test]
    fn test_zero_size_is_one_cell() {
        let mut rng = StdRng::seed_from_u64(0);
        let maze = generate_grid(0, Shape::Circle, &mut rng);
        assert_eq!(maze.size(), 1);
        assert_eq!(maze.max_distance(), 1);
    }

    #[test]
    fn test_single_start_and_end() {
        let mut rng = StdRng::seed_from_u64(11);
        let maze = generate_grid(30, Shape::Circle, &mut rng);
        let grid = maze.grid().unwrap();
        assert_eq!(grid.cells().iter().filter(|c| c.is_start).count(), 1);
        assert_eq!(grid.cells().iter().filter(|c| c.is_end).count(), 1);
        assert_ne!(maze.start(), maze.end());
    }
}
