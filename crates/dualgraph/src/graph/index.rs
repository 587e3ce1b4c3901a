//! The two sorted permutations of edge ids used by [`Graph`](super::Graph).
//!
//! `by_head` is ordered by `(head, tail, id)` and `by_tail` by `(tail, head, id)`. Edge ids
//! only ever grow, so "ties broken by id" is the same as "ties kept in insertion order".
//!
//! Two maintenance algorithms keep that order:
//!
//! - [`DualIndex::insert`] places a single new id with three binary searches and one shift,
//!   O(log n) to find the slot and O(n) to make room.
//! - [`DualIndex::extend`] appends a batch of new ids unsorted and re-sorts both arrays,
//!   O((n + m) log(n + m)). For a large batch this beats m incremental inserts, which cost
//!   O(nm) in shifting alone.

use crate::{EdgeId, VertexId};
use std::ops::Range;

#[derive(Debug, Clone, Default)]
pub(in crate::graph) struct DualIndex {
    pub(in crate::graph) by_head: Vec<EdgeId>,
    pub(in crate::graph) by_tail: Vec<EdgeId>,
}

impl DualIndex {
    pub(in crate::graph) fn with_capacity(capacity: usize) -> Self {
        Self {
            by_head: Vec::with_capacity(capacity),
            by_tail: Vec::with_capacity(capacity),
        }
    }

    pub(in crate::graph) fn len(&self) -> usize {
        debug_assert_eq!(self.by_head.len(), self.by_tail.len());
        self.by_head.len()
    }

    /// Indexes `edge`, which must be the newest stored edge and not yet indexed.
    pub(in crate::graph) fn insert(&mut self, edge: EdgeId, heads: &[VertexId], tails: &[VertexId]) {
        debug_assert_eq!(edge, self.len());
        let head_rank = insertion_rank(&self.by_head, edge, heads, tails);
        let tail_rank = insertion_rank(&self.by_tail, edge, tails, heads);
        tracing::trace!(edge, head_rank, tail_rank, "incremental index insert");
        self.by_head.insert(head_rank, edge);
        self.by_tail.insert(tail_rank, edge);
    }

    /// Indexes the contiguous run `edges` of newly stored edges in one pass.
    pub(in crate::graph) fn extend(
        &mut self,
        edges: Range<EdgeId>,
        heads: &[VertexId],
        tails: &[VertexId],
    ) {
        debug_assert_eq!(edges.start, self.len());
        self.by_head.extend(edges.clone());
        self.by_tail.extend(edges);
        sort_by_keys(&mut self.by_head, heads, tails);
        sort_by_keys(&mut self.by_tail, tails, heads);
    }
}

/// Position at which `edge` belongs in `index`, which is sorted by `(primary, secondary, id)`
/// and does not contain `edge` yet.
///
/// The primary bucket is found as `[lower, upper)`: `upper` is the first entry whose primary
/// key exceeds the new edge's, and `lower` is searched only inside `[0, upper)`. The secondary
/// key then picks the slot inside that bucket, after any equal entries so duplicates stay in
/// id order.
pub(in crate::graph) fn insertion_rank(
    index: &[EdgeId],
    edge: EdgeId,
    primary: &[VertexId],
    secondary: &[VertexId],
) -> usize {
    let p = primary[edge];
    let s = secondary[edge];
    let upper = index.partition_point(|&e| primary[e] <= p);
    let lower = index[..upper].partition_point(|&e| primary[e] < p);
    lower + index[lower..upper].partition_point(|&e| secondary[e] <= s)
}

fn sort_by_keys(index: &mut [EdgeId], primary: &[VertexId], secondary: &[VertexId]) {
    index.sort_unstable_by_key(|&e| (primary[e], secondary[e], e));
}
