use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::cell::RingCell;

/// Cell count of every ring, centre first.
///
/// Ring 0 always holds a single cell. Ring `r` aims for `r * multiplier` cells
/// (at least `multiplier`) and is snapped to the nearest whole multiple of the
/// previous ring, so each cell has a contiguous block of children and each
/// child exactly one parent.
pub fn ring_cell_counts(ring_count: usize, multiplier: usize) -> Vec<usize> {
    let mut counts = Vec::with_capacity(ring_count);
    if ring_count == 0 {
        return counts;
    }
    counts.push(1);
    for r in 1..ring_count {
        let prev = counts[r - 1];
        let estimated = (r * multiplier).max(multiplier);
        // round(estimated / prev) in integers, halves round up
        let ratio = ((2 * estimated + prev) / (2 * prev)).max(1);
        counts.push(prev * ratio);
    }
    counts
}

/// Concentric rings of cells, outer index is the ring.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rings {
    rows: Vec<Vec<RingCell>>,
}

impl Rings {
    /// Creates `ring_count` rings sized by [`ring_cell_counts`], all walls standing.
    pub fn new(ring_count: usize, multiplier: usize) -> Self {
        let counts = ring_cell_counts(ring_count, multiplier);
        let rows = counts
            .iter()
            .enumerate()
            .map(|(r, &len)| {
                let ratio = counts.get(r + 1).map_or(0, |&next| next / len);
                (0..len).map(|i| RingCell::new(r, i, ratio)).collect()
            })
            .collect();
        Rings { rows }
    }

    /// Number of rings.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<RingCell>] {
        &self.rows
    }

    pub fn ring_len(&self, r: usize) -> usize {
        self.rows.get(r).map_or(0, Vec::len)
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn cells(&self) -> impl Iterator<Item = &RingCell> {
        self.rows.iter().flatten()
    }

    pub fn get(&self, (r, i): (usize, usize)) -> Option<&RingCell> {
        self.rows.get(r).and_then(|row| row.get(i))
    }

    /// Indices in ring `r + 1` of the cells whose parent is `(r, i)`.
    pub fn children(&self, (r, i): (usize, usize)) -> Range<usize> {
        let len = self.ring_len(r);
        let next_len = self.ring_len(r + 1);
        if len == 0 || next_len == 0 {
            return 0..0;
        }
        let ratio = next_len / len;
        i * ratio..i * ratio + ratio
    }

    /// The cell on ring `r - 1` that `(r, i)` hangs off.
    pub fn parent(&self, (r, i): (usize, usize)) -> Option<(usize, usize)> {
        if r == 0 {
            return None;
        }
        let parent_len = self.ring_len(r - 1);
        if parent_len == 0 {
            return None;
        }
        let ratio = (self.ring_len(r) / parent_len).max(1);
        Some((r - 1, i / ratio))
    }

    /// Clockwise neighbour on the same ring. The centre and single-cell rings have none.
    pub fn clockwise(&self, (r, i): (usize, usize)) -> Option<(usize, usize)> {
        let len = self.ring_len(r);
        (r > 0 && len > 1).then(|| (r, (i + 1) % len))
    }

    pub fn counter_clockwise(&self, (r, i): (usize, usize)) -> Option<(usize, usize)> {
        let len = self.ring_len(r);
        (r > 0 && len > 1).then(|| (r, (i + len - 1) % len))
    }

    /// Checks the structural invariants a restored ring layout must satisfy:
    /// a single open centre cell, every ring a whole multiple of the previous
    /// one, cells at the positions they claim, and `ratio` matching the ring sizes.
    pub fn is_well_formed(&self) -> bool {
        let Some(center) = self.rows.first() else {
            return false;
        };
        if center.len() != 1 || center[0].inward || center[0].cw {
            return false;
        }
        let divisible = self
            .rows
            .windows(2)
            .all(|pair| !pair[1].is_empty() && pair[1].len() % pair[0].len() == 0);
        if !divisible {
            return false;
        }
        self.rows.iter().enumerate().all(|(r, row)| {
            let ratio = self.ring_len(r + 1) / row.len();
            row.iter()
                .enumerate()
                .all(|(i, cell)| cell.r == r && cell.i == i && cell.ratio == ratio)
        })
    }
}

impl std::ops::Index<(usize, usize)> for Rings {
    type Output = RingCell;

    fn index(&self, (r, i): (usize, usize)) -> &Self::Output {
        &self.rows[r][i]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Rings {
    fn index_mut(&mut self, (r, i): (usize, usize)) -> &mut Self::Output {
        &mut self.rows[r][i]
    }
}
