use rand::Rng;

/// A topology the recursive backtracker can carve a spanning tree through.
pub(crate) trait Carve {
    /// Cell address.
    type Node: Copy;
    /// Which wall of record a move knocks down.
    type Edge: Copy;

    fn mark_visited(&mut self, node: Self::Node);

    /// Pushes every unvisited cell reachable from `node` in one step onto `out`,
    /// together with the edge that leads there.
    fn candidates(&self, node: Self::Node, out: &mut Vec<(Self::Node, Self::Edge)>);

    /// Opens the passage from `from` to `to` along `edge`.
    fn open(&mut self, from: Self::Node, to: Self::Node, edge: Self::Edge);
}

/// Deepest point the carve reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Farthest<N> {
    pub node: N,
    /// Stack length when `node` was on top, the root alone counting as 1.
    pub depth: usize,
}

/// Iterative recursive backtracker.
///
/// Carves a spanning tree over every cell reachable from `root` and returns the
/// cell that sat on top of the deepest stack. Every push lands one level below
/// its parent in the tree, so the stack length equals tree depth and the
/// returned depth is the tree's maximum.
pub(crate) fn carve_spanning_tree<C, R>(maze: &mut C, root: C::Node, rng: &mut R) -> Farthest<C::Node>
where
    C: Carve,
    R: Rng,
{
    maze.mark_visited(root);

    // The stack holds the current branch, root at the bottom
    let mut stack = vec![root];
    let mut farthest = Farthest {
        node: root,
        depth: 0,
    };
    let mut candidates = Vec::with_capacity(8);

    while let Some(&current) = stack.last() {
        if stack.len() > farthest.depth {
            farthest = Farthest {
                node: current,
                depth: stack.len(),
            };
        }

        candidates.clear();
        maze.candidates(current, &mut candidates);

        if candidates.is_empty() {
            // Dead end, backtrack
            stack.pop();
            continue;
        }

        let (next, edge) = candidates[rng.random_range(0..candidates.len())];
        maze.open(current, next, edge);
        maze.mark_visited(next);
        stack.push(next);
    }

    farthest
}
