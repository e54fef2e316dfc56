use rand::Rng;

use crate::{
    generators::carve::{Carve, carve_spanning_tree},
    maze::{Coord, Layout, MazeResult, Rings, Shape},
};

/// A step between ring cells, named by where it leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RingMove {
    /// To a child on the next ring out.
    Out,
    /// To the parent on the next ring in.
    In,
    Cw,
    Ccw,
}

impl Carve for Rings {
    type Node = (usize, usize);
    type Edge = RingMove;

    fn mark_visited(&mut self, node: (usize, usize)) {
        self[node].visited = true;
    }

    fn candidates(&self, node: (usize, usize), out: &mut Vec<((usize, usize), RingMove)>) {
        let (r, _) = node;
        let children = self
            .children(node)
            .map(|i| ((r + 1, i), RingMove::Out));
        let lateral = [
            self.parent(node).map(|p| (p, RingMove::In)),
            self.clockwise(node).map(|n| (n, RingMove::Cw)),
            self.counter_clockwise(node).map(|n| (n, RingMove::Ccw)),
        ];
        out.extend(
            children
                .chain(lateral.into_iter().flatten())
                .filter(|&(next, _)| !self[next].visited),
        );
    }

    fn open(&mut self, from: (usize, usize), to: (usize, usize), edge: RingMove) {
        // Each edge has a single flag of record
        match edge {
            RingMove::Out => self[to].inward = false,
            RingMove::In => self[from].inward = false,
            RingMove::Cw => self[from].cw = false,
            RingMove::Ccw => self[to].cw = false,
        }
    }
}

/// Carves a maze of `size` concentric rings around a single centre cell.
///
/// `side_multiplier` sets how fast rings grow (see
/// [`ring_cell_counts`](crate::maze::ring_cell_counts)); `shape` is only
/// recorded on the result. A `size` of zero is treated as one.
pub fn generate_radial<R: Rng>(
    size: usize,
    side_multiplier: usize,
    shape: Shape,
    rng: &mut R,
) -> MazeResult {
    let ring_count = size.max(1);
    let mut rings = Rings::new(ring_count, side_multiplier);

    let root = (0, 0);
    let farthest = carve_spanning_tree(&mut rings, root, rng);
    rings[root].is_start = true;
    rings[farthest.node].is_end = true;

    tracing::debug!(
        "[generate] {} with {} rings ({} cells): end {:?}, max distance {}",
        shape,
        ring_count,
        rings.cell_count(),
        farthest.node,
        farthest.depth
    );

    MazeResult::new(
        Layout::Rings(rings),
        Coord::ring(root.0, root.1),
        Coord::ring(farthest.node.0, farthest.node.1),
        farthest.depth,
        shape,
    )
}
