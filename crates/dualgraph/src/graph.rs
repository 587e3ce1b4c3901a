//! The dual-indexed graph container.
//!
//! Storage is four parallel structures owned by one [`Graph`]: the insertion-ordered endpoint
//! arrays, the two sorted permutations of edge ids (by head, by tail), and the cumulative sums
//! that turn those permutations into O(1) degree and bucket lookups. Every mutation goes through
//! [`Graph::add_edge`], [`Graph::add_edges`] or [`Graph::set_vertex_count`], which update all of
//! them together or not at all.
//!
//! Directed and undirected graphs are the same type specialized on a `const DIRECTED: bool`;
//! the direction-specific query names live in separate `impl` blocks for [`DiGraph`] and
//! [`UnGraph`].

mod index;
mod store;
mod sums;

use crate::api::{
    GraphApi, UndirectedApi, forward_graph_api_common, forward_graph_api_directed,
    forward_graph_api_undirected,
};
use crate::error::{Error, Result};
use crate::options::GraphOptions;
use crate::seq::{EdgeSeq, NeighbourSeq};
use crate::{EdgeId, VertexId};
use index::DualIndex;
use std::ops::Range;
use store::EdgeStore;
use sums::CumulativeSums;

pub use sums::MAX_VERTEX_COUNT;

#[derive(Debug, Clone)]
pub struct Graph<const DIRECTED: bool> {
    options: GraphOptions,
    store: EdgeStore<DIRECTED>,
    index: DualIndex,
    sums: CumulativeSums,
    // Bumped on every successful mutation.
    generation: u64,
}

pub type DiGraph = Graph<true>;
pub type UnGraph = Graph<false>;

impl<const DIRECTED: bool> Default for Graph<DIRECTED> {
    fn default() -> Self {
        Self::new(GraphOptions::default())
    }
}

impl<const DIRECTED: bool> Graph<DIRECTED> {
    /// Panics if `options.vertex_count` exceeds [`MAX_VERTEX_COUNT`].
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            store: EdgeStore::with_capacity(options.edge_capacity),
            index: DualIndex::with_capacity(options.edge_capacity),
            sums: CumulativeSums::new(options.vertex_count),
            generation: 0,
        }
    }

    pub fn with_vertex_count(vertex_count: usize) -> Self {
        Self::new(GraphOptions {
            vertex_count,
            ..Default::default()
        })
    }

    /// Builds a graph in one batch insertion.
    pub fn from_edges<I>(vertex_count: usize, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        let mut g = Self::with_vertex_count(vertex_count);
        g.add_edges(pairs)?;
        Ok(g)
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_directed(&self) -> bool {
        DIRECTED
    }

    /// Counts successful mutations; unchanged by failed ones.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn vertex_count(&self) -> usize {
        self.sums.vertex_count()
    }

    /// Grows or shrinks the vertex set.
    ///
    /// New vertices start without edges. Shrinking fails with
    /// [`Error::VertexCountShrink`] and changes nothing if a removed vertex has an edge.
    /// Counts above [`MAX_VERTEX_COUNT`] fail with [`Error::VertexCountTooLarge`].
    pub fn set_vertex_count(&mut self, vertex_count: usize) -> Result<()> {
        let current = self.vertex_count();
        if vertex_count == current {
            return Ok(());
        }
        if let Err(err) = self.sums.resize(vertex_count) {
            tracing::debug!(current, requested = vertex_count, %err, "refused vertex count change");
            return Err(err);
        }
        tracing::debug!(from = current, to = vertex_count, "vertex count changed");
        self.commit();
        Ok(())
    }

    pub fn edge_count(&self) -> usize {
        self.store.len()
    }

    /// Stored endpoints of `id`; undirected edges come back canonical (`head <= tail`).
    pub fn edge(&self, id: EdgeId) -> Option<(VertexId, VertexId)> {
        self.store.edge(id)
    }

    /// Every edge in insertion (id) order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = (EdgeId, (VertexId, VertexId))> + '_ {
        self.store
            .heads
            .iter()
            .zip(&self.store.tails)
            .enumerate()
            .map(|(id, (&head, &tail))| (id, (head, tail)))
    }

    /// Edge ids ordered by `(head, tail)`; ties keep insertion order.
    pub fn index_by_head(&self) -> &[EdgeId] {
        &self.index.by_head
    }

    /// Edge ids ordered by `(tail, head)`; ties keep insertion order.
    pub fn index_by_tail(&self) -> &[EdgeId] {
        &self.index.by_tail
    }

    /// Adds one edge and indexes it incrementally. Parallel edges and self-loops are allowed.
    pub fn add_edge(&mut self, head: VertexId, tail: VertexId) -> Result<EdgeId> {
        let id = self.store.append(head, tail, self.vertex_count())?;
        self.index.insert(id, &self.store.heads, &self.store.tails);
        self.refresh_sums();
        self.commit();
        Ok(id)
    }

    /// Adds a batch of edges, returning their (contiguous) ids.
    ///
    /// The whole batch is validated first: one out-of-range endpoint rejects every pair.
    /// Batches larger than [`GraphOptions::incremental_batch_limit`] are indexed by appending
    /// and re-sorting instead of one insertion at a time.
    pub fn add_edges<I>(&mut self, pairs: I) -> Result<Range<EdgeId>>
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        let added = self.store.append_all(pairs, self.vertex_count())?;
        if added.is_empty() {
            return Ok(added);
        }

        if added.len() <= self.options.incremental_batch_limit {
            for id in added.clone() {
                self.index.insert(id, &self.store.heads, &self.store.tails);
            }
        } else {
            tracing::debug!(
                existing = added.start,
                added = added.len(),
                "rebuilding dual index"
            );
            self.index
                .extend(added.clone(), &self.store.heads, &self.store.tails);
        }
        self.refresh_sums();
        self.commit();
        Ok(added)
    }

    pub fn is_edge(&self, head: VertexId, tail: VertexId) -> bool {
        self.find_edge(head, tail).is_ok()
    }

    /// Id of a `(head, tail)` edge; the smallest such id when the pair is duplicated.
    pub fn edge_id(&self, head: VertexId, tail: VertexId) -> Result<EdgeId> {
        self.find_edge(head, tail)
    }

    // Scans whichever of the two candidate buckets is smaller, so the cost is
    // min(out-degree of head, in-degree of tail).
    fn find_edge(&self, head: VertexId, tail: VertexId) -> Result<EdgeId> {
        let (head, tail) = EdgeStore::<DIRECTED>::canonical(head, tail);
        let out = self.head_bucket(head);
        if out.is_empty() {
            return Err(Error::NoOutgoingEdges { vertex: head });
        }
        let inc = self.tail_bucket(tail);
        if inc.is_empty() {
            return Err(Error::NoIncomingEdges { vertex: tail });
        }

        let found = if out.len() <= inc.len() {
            out.iter().copied().find(|&e| self.store.tails[e] == tail)
        } else {
            inc.iter().copied().find(|&e| self.store.heads[e] == head)
        };
        found.ok_or(Error::EdgeNotFound { head, tail })
    }

    fn head_bucket(&self, v: VertexId) -> &[EdgeId] {
        &self.index.by_head[self.sums.head_range(v)]
    }

    fn tail_bucket(&self, v: VertexId) -> &[EdgeId] {
        &self.index.by_tail[self.sums.tail_range(v)]
    }

    fn refresh_sums(&mut self) {
        self.sums
            .recompute(&self.index, &self.store.heads, &self.store.tails);
    }

    fn commit(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        #[cfg(debug_assertions)]
        self.debug_check_invariants();
    }

    #[cfg(debug_assertions)]
    fn debug_check_invariants(&self) {
        let n = self.store.len();
        let vertex_count = self.vertex_count();
        debug_assert_eq!(self.store.tails.len(), n);
        debug_assert_eq!(self.index.by_head.len(), n);
        debug_assert_eq!(self.index.by_tail.len(), n);
        debug_assert_eq!(self.sums.head.len(), vertex_count + 1);
        debug_assert_eq!(self.sums.tail.len(), vertex_count + 1);

        for e in 0..n {
            let (head, tail) = (self.store.heads[e], self.store.tails[e]);
            debug_assert!(head < vertex_count && tail < vertex_count);
            debug_assert!(DIRECTED || head <= tail, "undirected edge {e} not canonical");
        }

        let heads: &[VertexId] = &self.store.heads;
        let tails: &[VertexId] = &self.store.tails;
        let key = |primary: &[VertexId], secondary: &[VertexId], e: EdgeId| {
            (primary[e], secondary[e], e)
        };
        debug_assert!(
            self.index
                .by_head
                .windows(2)
                .all(|w| key(heads, tails, w[0]) < key(heads, tails, w[1])),
            "by_head out of order"
        );
        debug_assert!(
            self.index
                .by_tail
                .windows(2)
                .all(|w| key(tails, heads, w[0]) < key(tails, heads, w[1])),
            "by_tail out of order"
        );
        // Strictly increasing keys that include the id also rule out repeated ids, and every
        // id is < n, so both arrays are permutations of 0..n.
        debug_assert!(self.index.by_head.iter().all(|&e| e < n));
        debug_assert!(self.index.by_tail.iter().all(|&e| e < n));

        for sum in [&self.sums.head, &self.sums.tail] {
            debug_assert_eq!(sum[0], 0);
            debug_assert_eq!(sum[vertex_count], n);
            debug_assert!(sum.windows(2).all(|w| w[0] <= w[1]));
        }
        for v in 0..vertex_count {
            debug_assert!(self.head_bucket(v).iter().all(|&e| heads[e] == v));
            debug_assert!(self.tail_bucket(v).iter().all(|&e| tails[e] == v));
        }
    }
}

impl Graph<true> {
    pub fn degree_out(&self, v: VertexId) -> usize {
        self.sums.degree_out(v)
    }

    pub fn degree_in(&self, v: VertexId) -> usize {
        self.sums.degree_in(v)
    }

    /// Edges leaving `v`, ordered by tail.
    pub fn incident_edges_out(&self, v: VertexId) -> EdgeSeq<'_> {
        EdgeSeq::single(self.head_bucket(v))
    }

    /// Edges entering `v`, ordered by head.
    pub fn incident_edges_in(&self, v: VertexId) -> EdgeSeq<'_> {
        EdgeSeq::single(self.tail_bucket(v))
    }

    /// Tails of the edges leaving `v` (with repeats for parallel edges).
    pub fn neighbours_out(&self, v: VertexId) -> NeighbourSeq<'_> {
        NeighbourSeq::new(self.incident_edges_out(v), &self.store.tails, &[])
    }

    /// Heads of the edges entering `v` (with repeats for parallel edges).
    pub fn neighbours_in(&self, v: VertexId) -> NeighbourSeq<'_> {
        NeighbourSeq::new(self.incident_edges_in(v), &self.store.heads, &[])
    }
}

impl Graph<false> {
    /// Number of edge endpoints at `v`; a self-loop counts twice.
    pub fn degree(&self, v: VertexId) -> usize {
        self.sums.degree_out(v) + self.sums.degree_in(v)
    }

    /// Edges stored with `v` as head, then edges stored with `v` as tail.
    ///
    /// A self-loop at `v` shows up in both runs.
    pub fn incident_edges(&self, v: VertexId) -> EdgeSeq<'_> {
        EdgeSeq::pair(self.head_bucket(v), self.tail_bucket(v))
    }

    /// The other endpoint of every edge in [`UnGraph::incident_edges`], in the same order.
    pub fn neighbours(&self, v: VertexId) -> NeighbourSeq<'_> {
        NeighbourSeq::new(self.incident_edges(v), &self.store.tails, &self.store.heads)
    }
}

impl GraphApi for Graph<true> {
    const DIRECTED: bool = true;

    type Edges<'a> = EdgeSeq<'a>;
    type Neighbours<'a> = NeighbourSeq<'a>;

    forward_graph_api_common!();
    forward_graph_api_directed!();
}

impl GraphApi for Graph<false> {
    const DIRECTED: bool = false;

    type Edges<'a> = EdgeSeq<'a>;
    type Neighbours<'a> = NeighbourSeq<'a>;

    forward_graph_api_common!();
    forward_graph_api_undirected!();
}

impl UndirectedApi for Graph<false> {
    fn degree(&self, v: VertexId) -> usize {
        self.degree(v)
    }

    fn incident_edges(&self, v: VertexId) -> EdgeSeq<'_> {
        self.incident_edges(v)
    }

    fn neighbours(&self, v: VertexId) -> NeighbourSeq<'_> {
        self.neighbours(v)
    }
}
