//! Planar placement of ring cells.
//!
//! Ring mazes are numbered `(ring, index)`. Renderers turn those numbers into
//! points here so that every drawing agrees with the generator's numbering:
//! index 0 sits at the first vertex and indices run in increasing angle.

use std::f64::consts::TAU;

use crate::maze::Shape;

/// A point on the drawing plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Point2 { x, y }
    }

    fn lerp(self, other: Point2, t: f64) -> Point2 {
        Point2 {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    pub fn distance(self, other: Point2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Angles, in degrees from the positive x axis, of the triangle's corners.
/// With y growing downwards the first corner is the apex.
pub const TRIANGLE_VERTEX_ANGLES: [f64; 3] = [-90.0, 30.0, 150.0];

/// Corners of the equilateral triangle of circumradius `radius` around `center`.
pub fn triangle_vertices(radius: f64, center: Point2) -> [Point2; 3] {
    TRIANGLE_VERTEX_ANGLES.map(|deg| {
        let angle = deg.to_radians();
        Point2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
    })
}

/// Position of cell `index` out of `total_cells` on a ring of `radius`.
///
/// [`Shape::Triangle`] walks the triangle's perimeter, spending `total_cells / 3`
/// cells on each side and interpolating linearly along it. Every other shape
/// places the cell on a circle at angle `2π · index / total_cells`. An empty
/// ring maps to the centre.
pub fn map_to_point(
    radius: f64,
    index: usize,
    total_cells: usize,
    center: Point2,
    shape: Shape,
) -> Point2 {
    if total_cells == 0 {
        return center;
    }
    let index = index % total_cells;
    match shape {
        Shape::Triangle => {
            let vertices = triangle_vertices(radius, center);
            let per_side = total_cells as f64 / 3.0;
            let along = index as f64 / per_side;
            let side = (along.floor() as usize).min(2);
            let t = along - side as f64;
            vertices[side].lerp(vertices[(side + 1) % 3], t)
        }
        Shape::Polar | Shape::Square | Shape::Circle => {
            let angle = TAU * index as f64 / total_cells as f64;
            Point2::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(a: Point2, b: Point2) {
        assert!(a.distance(b) < EPS, "{a:?} != {b:?}");
    }

    #[test]
    fn test_polar_quarter_turns() {
        let c = Point2::new(10.0, 10.0);
        assert_close(map_to_point(2.0, 0, 4, c, Shape::Polar), Point2::new(12.0, 10.0));
        assert_close(map_to_point(2.0, 1, 4, c, Shape::Polar), Point2::new(10.0, 12.0));
        assert_close(map_to_point(2.0, 2, 4, c, Shape::Polar), Point2::new(8.0, 10.0));
        // Indices wrap around the ring
        assert_close(map_to_point(2.0, 5, 4, c, Shape::Polar), Point2::new(10.0, 12.0));
    }

    #[test]
    fn test_triangle_vertices_hit_corners() {
        let c = Point2::new(0.0, 0.0);
        let [apex, right, left] = triangle_vertices(1.0, c);
        assert_close(apex, Point2::new(0.0, -1.0));
        assert!(right.x > 0.0 && left.x < 0.0);
        assert!((right.y - 0.5).abs() < EPS && (left.y - 0.5).abs() < EPS);

        // Each side starts at a corner
        assert_close(map_to_point(1.0, 0, 12, c, Shape::Triangle), apex);
        assert_close(map_to_point(1.0, 4, 12, c, Shape::Triangle), right);
        assert_close(map_to_point(1.0, 8, 12, c, Shape::Triangle), left);
    }

    #[test]
    fn test_triangle_interpolates_along_side() {
        let c = Point2::new(0.0, 0.0);
        let [apex, right, _] = triangle_vertices(3.0, c);
        let mid = map_to_point(3.0, 3, 12, c, Shape::Triangle);
        let expected = apex.lerp(right, 0.75);
        assert_close(mid, expected);
        // Points on a side stay on the segment between its corners
        let side = apex.distance(right);
        assert!((apex.distance(mid) + mid.distance(right) - side).abs() < EPS);
    }

    #[test]
    fn test_degenerate_rings() {
        let c = Point2::new(4.0, 4.0);
        assert_eq!(map_to_point(3.0, 0, 0, c, Shape::Triangle), c);
        assert_close(map_to_point(0.0, 0, 1, c, Shape::Polar), c);
        // A single cell triangle ring still lands on the apex
        let apex = triangle_vertices(2.0, c)[0];
        assert_close(map_to_point(2.0, 0, 1, c, Shape::Triangle), apex);
    }
}
