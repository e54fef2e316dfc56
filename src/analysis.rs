//! Read-only inspection of a carved maze: which passages are open, how far
//! each cell sits from the start, and whether the carve formed a spanning tree.

use std::collections::{HashMap, VecDeque};

use crate::maze::{Coord, Direction, Grid, Layout, MazeResult, Rings};

/// Cells reachable from `at` through an open passage.
pub fn open_neighbors(layout: &Layout, at: Coord) -> Vec<Coord> {
    match (layout, at) {
        (Layout::Grid(grid), Coord::Grid(p)) => grid_open_neighbors(grid, (p.x, p.y)),
        (Layout::Rings(rings), Coord::Ring(p)) => ring_open_neighbors(rings, (p.r, p.i)),
        _ => Vec::new(),
    }
}

fn grid_open_neighbors(grid: &Grid, coord: (u16, u16)) -> Vec<Coord> {
    let Some(cell) = grid.get(coord) else {
        return Vec::new();
    };
    Direction::ALL
        .into_iter()
        .filter(|&dir| !cell.walls.get(dir))
        .filter_map(|dir| grid.neighbor(coord, dir))
        .filter(|&next| grid[next].is_active)
        .map(|(x, y)| Coord::grid(x, y))
        .collect()
}

fn ring_open_neighbors(rings: &Rings, node: (usize, usize)) -> Vec<Coord> {
    let Some(cell) = rings.get(node) else {
        return Vec::new();
    };
    let (r, _) = node;
    let mut open = rings
        .children(node)
        .filter(|&i| !rings[(r + 1, i)].inward)
        .map(|i| Coord::ring(r + 1, i))
        .collect::<Vec<_>>();
    if !cell.inward {
        open.extend(rings.parent(node).map(|(r, i)| Coord::ring(r, i)));
    }
    if !cell.cw {
        open.extend(rings.clockwise(node).map(|(r, i)| Coord::ring(r, i)));
    }
    open.extend(
        rings
            .counter_clockwise(node)
            .filter(|&ccw| !rings[ccw].cw)
            .map(|(r, i)| Coord::ring(r, i)),
    );
    open
}

/// Breadth-first distance, in passages, from the start to every reachable cell.
pub fn distances_from_start(maze: &MazeResult) -> HashMap<Coord, usize> {
    let layout = maze.layout();
    let mut distances = HashMap::new();
    if !layout.contains(maze.start()) {
        return distances;
    }
    distances.insert(maze.start(), 0);
    let mut queue = VecDeque::from([maze.start()]);
    while let Some(current) = queue.pop_front() {
        let next_distance = distances[&current] + 1;
        for next in open_neighbors(layout, current) {
            if !distances.contains_key(&next) {
                distances.insert(next, next_distance);
                queue.push_back(next);
            }
        }
    }
    distances
}

/// Number of open passages. Each shared edge counts once.
pub fn carved_edges(maze: &MazeResult) -> usize {
    match maze.layout() {
        Layout::Grid(grid) => grid
            .cells()
            .iter()
            .filter(|cell| cell.is_active)
            .map(|cell| {
                [Direction::Right, Direction::Down]
                    .into_iter()
                    .filter(|&dir| !cell.walls.get(dir))
                    .filter(|&dir| grid.neighbor((cell.x, cell.y), dir).is_some())
                    .count()
            })
            .sum(),
        Layout::Rings(rings) => rings
            .cells()
            .filter(|cell| cell.r > 0)
            .map(|cell| {
                let inward = usize::from(!cell.inward);
                let cw = usize::from(!cell.cw && rings.ring_len(cell.r) > 1);
                inward + cw
            })
            .sum(),
    }
}

/// Cells that belong to the maze.
pub fn active_cells(maze: &MazeResult) -> usize {
    match maze.layout() {
        Layout::Grid(grid) => grid.cells().iter().filter(|cell| cell.is_active).count(),
        Layout::Rings(rings) => rings.cell_count(),
    }
}

/// Whether the open passages form a spanning tree over the active cells:
/// one fewer passage than cells, and every cell reachable from the start.
pub fn is_perfect(maze: &MazeResult) -> bool {
    let active = active_cells(maze);
    active > 0
        && carved_edges(maze) == active - 1
        && distances_from_start(maze).len() == active
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::generate_maze;
    use crate::maze::Shape;

    #[test]
    fn test_open_neighbors_are_mutual() {
        for shape in Shape::ALL {
            let maze = generate_maze(12, shape, Some(8));
            for &coord in distances_from_start(&maze).keys() {
                for next in open_neighbors(maze.layout(), coord) {
                    assert!(
                        open_neighbors(maze.layout(), next).contains(&coord),
                        "{shape}: {coord} -> {next}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_uncarved_grid_is_not_perfect() {
        let maze = MazeResult::new(
            Layout::Grid(Grid::new(3)),
            Coord::grid(0, 0),
            Coord::grid(0, 0),
            1,
            Shape::Square,
        );
        assert_eq!(carved_edges(&maze), 0);
        assert_eq!(distances_from_start(&maze).len(), 1);
        assert!(!is_perfect(&maze));
    }

    #[test]
    fn test_mismatched_coord_has_no_neighbors() {
        let maze = generate_maze(5, Shape::Square, Some(0));
        assert!(open_neighbors(maze.layout(), Coord::ring(0, 0)).is_empty());
    }
}
