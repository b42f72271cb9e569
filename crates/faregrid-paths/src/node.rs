use std::cmp::Ordering;

use faregrid_core::{Grid, Position};

/// Sentinel parent index for the search root.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Frontier entry for priority-queue searches
// ---------------------------------------------------------------------------

/// Reference into the grid, ordered for use in a `BinaryHeap`.
///
/// Smaller `f` pops first; ties go to the smaller `h`, then to the smaller
/// position, so every search is deterministic.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) pos: Position,
    pub(crate) f: f64,
    pub(crate) h: f64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.h.total_cmp(&self.h))
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

// ---------------------------------------------------------------------------
// Trail
// ---------------------------------------------------------------------------

/// Parent links recorded during a search, one slot per grid cell.
pub(crate) struct Trail {
    parents: Vec<usize>,
}

impl Trail {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            parents: vec![NO_PARENT; len],
        }
    }

    #[inline]
    pub(crate) fn link(&mut self, child: usize, parent: usize) {
        self.parents[child] = parent;
    }

    /// Walk parent links back from `goal` and return the path root-first.
    pub(crate) fn path(&self, grid: &Grid, goal: usize) -> Vec<Position> {
        let mut path = Vec::new();
        let mut ci = goal;
        while ci != NO_PARENT {
            path.push(grid.position(ci));
            ci = self.parents[ci];
        }
        path.reverse();
        path
    }
}
