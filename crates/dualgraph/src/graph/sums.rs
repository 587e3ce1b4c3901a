//! Cumulative bucket boundaries derived from the dual index.
//!
//! `head[v]` is the number of edges whose head is `< v`, so the head bucket of `v` is
//! `by_head[head[v]..head[v + 1]]` and its size is the out-degree. `tail` is the mirror
//! image over `by_tail`. Both arrays have `vertex_count + 1` entries, start at 0 and end at
//! the edge count.

use super::DualIndex;
use crate::error::{Error, Result};
use crate::{EdgeId, VertexId};
use std::ops::Range;

/// Largest vertex count whose boundary arrays (`vertex_count + 1` entries) fit in a `Vec`.
pub const MAX_VERTEX_COUNT: usize = isize::MAX as usize / size_of::<usize>() - 1;

#[derive(Debug, Clone)]
pub(in crate::graph) struct CumulativeSums {
    pub(in crate::graph) head: Vec<usize>,
    pub(in crate::graph) tail: Vec<usize>,
}

impl CumulativeSums {
    /// Panics if `vertex_count` exceeds [`MAX_VERTEX_COUNT`].
    pub(in crate::graph) fn new(vertex_count: usize) -> Self {
        assert!(
            vertex_count <= MAX_VERTEX_COUNT,
            "vertex count {vertex_count} exceeds the maximum of {MAX_VERTEX_COUNT}"
        );
        Self {
            head: vec![0; vertex_count + 1],
            tail: vec![0; vertex_count + 1],
        }
    }

    pub(in crate::graph) fn vertex_count(&self) -> usize {
        self.head.len() - 1
    }

    pub(in crate::graph) fn recompute(
        &mut self,
        index: &DualIndex,
        heads: &[VertexId],
        tails: &[VertexId],
    ) {
        recompute(&mut self.head, heads, &index.by_head);
        recompute(&mut self.tail, tails, &index.by_tail);
    }

    /// Grows by repeating the final boundary, or shrinks if every dropped vertex is edgeless.
    ///
    /// Existing boundaries never move, so no recompute is needed either way.
    pub(in crate::graph) fn resize(&mut self, vertex_count: usize) -> Result<()> {
        if vertex_count > MAX_VERTEX_COUNT {
            return Err(Error::VertexCountTooLarge {
                requested: vertex_count,
                max: MAX_VERTEX_COUNT,
            });
        }
        let current = self.vertex_count();
        if vertex_count < current
            && (self.head[vertex_count] != self.head[current]
                || self.tail[vertex_count] != self.tail[current])
        {
            return Err(Error::VertexCountShrink {
                requested: vertex_count,
                vertex_count: current,
            });
        }
        let edge_count = self.head[current];
        self.head.resize(vertex_count + 1, edge_count);
        self.tail.resize(vertex_count + 1, edge_count);
        Ok(())
    }

    pub(in crate::graph) fn head_range(&self, v: VertexId) -> Range<usize> {
        bucket(&self.head, v)
    }

    pub(in crate::graph) fn tail_range(&self, v: VertexId) -> Range<usize> {
        bucket(&self.tail, v)
    }

    pub(in crate::graph) fn degree_out(&self, v: VertexId) -> usize {
        self.head_range(v).len()
    }

    pub(in crate::graph) fn degree_in(&self, v: VertexId) -> usize {
        self.tail_range(v).len()
    }
}

fn bucket(sum: &[usize], v: VertexId) -> Range<usize> {
    match (sum.get(v), v.checked_add(1).and_then(|next| sum.get(next))) {
        (Some(&start), Some(&end)) => start..end,
        _ => 0..0,
    }
}

/// Single pass over a sorted index: each vertex gets the position where its bucket starts,
/// empty buckets collapse onto the next occupied one, and trailing vertices get the edge count.
fn recompute(sum: &mut [usize], keys: &[VertexId], index: &[EdgeId]) {
    let mut v = 0;
    for (pos, &e) in index.iter().enumerate() {
        let key = keys[e];
        while v <= key {
            sum[v] = pos;
            v += 1;
        }
    }
    for slot in &mut sum[v..] {
        *slot = index.len();
    }
}
