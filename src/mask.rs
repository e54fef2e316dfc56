//! Shape masks for rectilinear mazes.

use crate::maze::{Grid, Shape};

/// Fraction of the half-width a circular mask keeps.
const CIRCLE_RADIUS_FACTOR: f64 = 0.95;

/// Whether `(x, y)` lies inside `shape` on a `size × size` grid.
///
/// Only [`Shape::Circle`] masks anything; every other shape keeps all cells.
pub fn is_inside(shape: Shape, size: u16, (x, y): (u16, u16)) -> bool {
    match shape {
        Shape::Circle => {
            let center = (size as f64 - 1.0) / 2.0;
            let radius = CIRCLE_RADIUS_FACTOR * center;
            let dx = x as f64 - center;
            let dy = y as f64 - center;
            dx * dx + dy * dy <= radius * radius
        }
        Shape::Square | Shape::Triangle | Shape::Polar => true,
    }
}

/// Sets `is_active` on every cell for `shape`. Cells left outside are also
/// marked visited so the carve never enters them.
///
/// Returns the number of active cells.
pub fn apply_mask(grid: &mut Grid, shape: Shape) -> usize {
    let size = grid.size();
    let mut active = 0;
    for cell in grid.cells_mut() {
        cell.is_active = is_inside(shape, size, (cell.x, cell.y));
        if cell.is_active {
            active += 1;
        } else {
            cell.visited = true;
        }
    }
    tracing::debug!(
        "[mask] {} mask on {}x{} grid keeps {} cells",
        shape,
        size,
        size,
        active
    );
    active
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_mask_keeps_everything() {
        let mut grid = Grid::new(6);
        assert_eq!(apply_mask(&mut grid, Shape::Square), 36);
        assert!(grid.cells().iter().all(|c| c.is_active && !c.visited));
    }

    #[test]
    fn test_circle_mask_drops_corners() {
        let mut grid = Grid::new(20);
        let active = apply_mask(&mut grid, Shape::Circle);
        assert!(active > 0 && active < 400);
        assert!(!grid[(0, 0)].is_active);
        assert!(grid[(0, 0)].visited);
        assert!(grid[(10, 10)].is_active);
        assert!(!grid[(10, 10)].visited);
    }

    #[test]
    fn test_circle_mask_point_symmetry() {
        for size in [1u16, 2, 5, 10, 11, 37, 100] {
            for y in 0..size {
                for x in 0..size {
                    let rotated = (size - 1 - x, size - 1 - y);
                    assert_eq!(
                        is_inside(Shape::Circle, size, (x, y)),
                        is_inside(Shape::Circle, size, rotated),
                        "size {size} at ({x}, {y})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_tiny_circle_masks() {
        // A single cell is its own centre
        assert!(is_inside(Shape::Circle, 1, (0, 0)));
        // Two cells per side leave nothing inside the shrunken radius
        let mut grid = Grid::new(2);
        assert_eq!(apply_mask(&mut grid, Shape::Circle), 0);
        assert_eq!(grid.first_active(), None);
    }
}
