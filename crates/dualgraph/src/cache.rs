//! A memoizing wrapper around [`Graph`].
//!
//! Indexed queries are already allocation free, but callers that walk the same neighbourhoods
//! over and over (or want plain slices) can wrap the graph in a [`CachedGraph`]. Derived
//! sequences are materialized on first use into one shared arena buffer and handed out as
//! slices of it. Any successful mutation drops the whole arena before returning, so a memo is
//! never older than the last completed mutation.

use crate::api::{
    GraphApi, UndirectedApi, forward_graph_api_common, forward_graph_api_directed,
    forward_graph_api_undirected,
};
use crate::error::Result;
use crate::graph::Graph;
use crate::seq::{SeqIter, Sequence};
use crate::{EdgeId, VertexId};
use rustc_hash::FxBuildHasher;
use std::cell::{Cell, Ref, RefCell};
use std::ops::{Deref, Range};

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum MemoKind {
    EdgesIn,
    EdgesOut,
    Edges,
    NeighboursIn,
    NeighboursOut,
    Neighbours,
}

#[derive(Debug, Clone, Default)]
struct MemoArena {
    // Generation of the wrapped graph the memos were derived from.
    generation: u64,
    buffer: Vec<usize>,
    slots: HashMap<(MemoKind, VertexId), Range<usize>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Sequences currently held in the arena.
    pub memoized: usize,
}

/// A memoized sequence, or a one-off computation when the arena was busy.
///
/// The arena is borrowed for as long as a `CachedSeq::Memo` lives. Asking for a sequence that
/// is not memoized yet while another one is still held computes it into its own buffer instead
/// of growing the arena underneath the outstanding borrow.
#[derive(Debug)]
pub enum CachedSeq<'a> {
    Memo(Ref<'a, [usize]>),
    Fresh(Vec<usize>),
}

impl Deref for CachedSeq<'_> {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        match self {
            CachedSeq::Memo(slice) => &**slice,
            CachedSeq::Fresh(buf) => buf.as_slice(),
        }
    }
}

impl Sequence for CachedSeq<'_> {
    fn len(&self) -> usize {
        <[usize]>::len(self)
    }

    fn get(&self, index: usize) -> Option<usize> {
        <[usize]>::get(self, index).copied()
    }
}

impl<'s, 'a> IntoIterator for &'s CachedSeq<'a> {
    type Item = usize;
    type IntoIter = SeqIter<&'s CachedSeq<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        SeqIter::new(self)
    }
}

#[derive(Debug, Clone)]
pub struct CachedGraph<const DIRECTED: bool> {
    graph: Graph<DIRECTED>,
    arena: RefCell<MemoArena>,
    hits: Cell<u64>,
    misses: Cell<u64>,
}

impl<const DIRECTED: bool> From<Graph<DIRECTED>> for CachedGraph<DIRECTED> {
    fn from(graph: Graph<DIRECTED>) -> Self {
        Self::new(graph)
    }
}

impl<const DIRECTED: bool> Default for CachedGraph<DIRECTED> {
    fn default() -> Self {
        Self::new(Graph::default())
    }
}

impl<const DIRECTED: bool> CachedGraph<DIRECTED> {
    pub fn new(graph: Graph<DIRECTED>) -> Self {
        let arena = MemoArena {
            generation: graph.generation(),
            ..Default::default()
        };
        Self {
            graph,
            arena: RefCell::new(arena),
            hits: Cell::new(0),
            misses: Cell::new(0),
        }
    }

    /// The wrapped graph. There is no `inner_mut`: mutations must go through the wrapper so
    /// the memos are dropped.
    pub fn inner(&self) -> &Graph<DIRECTED> {
        &self.graph
    }

    pub fn into_inner(self) -> Graph<DIRECTED> {
        self.graph
    }

    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.get(),
            misses: self.misses.get(),
            memoized: self.arena.borrow().slots.len(),
        }
    }

    pub fn clear_cache(&mut self) {
        self.invalidate();
    }

    pub fn is_directed(&self) -> bool {
        DIRECTED
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn set_vertex_count(&mut self, vertex_count: usize) -> Result<()> {
        let before = self.graph.generation();
        self.graph.set_vertex_count(vertex_count)?;
        if self.graph.generation() != before {
            self.invalidate();
        }
        Ok(())
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn edge(&self, id: EdgeId) -> Option<(VertexId, VertexId)> {
        self.graph.edge(id)
    }

    pub fn is_edge(&self, head: VertexId, tail: VertexId) -> bool {
        self.graph.is_edge(head, tail)
    }

    pub fn edge_id(&self, head: VertexId, tail: VertexId) -> Result<EdgeId> {
        self.graph.edge_id(head, tail)
    }

    pub fn add_edge(&mut self, head: VertexId, tail: VertexId) -> Result<EdgeId> {
        let id = self.graph.add_edge(head, tail)?;
        self.invalidate();
        Ok(id)
    }

    pub fn add_edges<I>(&mut self, pairs: I) -> Result<Range<EdgeId>>
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        let added = self.graph.add_edges(pairs)?;
        if !added.is_empty() {
            self.invalidate();
        }
        Ok(added)
    }

    fn invalidate(&mut self) {
        let arena = self.arena.get_mut();
        tracing::trace!(
            memoized = arena.slots.len(),
            buffered = arena.buffer.len(),
            "dropping memoized sequences"
        );
        arena.buffer.clear();
        arena.slots.clear();
        arena.generation = self.graph.generation();
    }

    fn memoized<S: Sequence>(&self, kind: MemoKind, v: VertexId, derive: S) -> CachedSeq<'_> {
        let key = (kind, v);
        let arena = self.arena.borrow();
        debug_assert_eq!(arena.generation, self.graph.generation(), "stale memo arena");
        if let Some(range) = arena.slots.get(&key).cloned() {
            self.hits.set(self.hits.get() + 1);
            return CachedSeq::Memo(Ref::map(arena, |a| &a.buffer[range]));
        }
        drop(arena);

        self.misses.set(self.misses.get() + 1);
        let Ok(mut arena) = self.arena.try_borrow_mut() else {
            return CachedSeq::Fresh(derive.to_vec());
        };
        let start = arena.buffer.len();
        arena.buffer.extend(derive.iter());
        let range = start..arena.buffer.len();
        tracing::trace!(?kind, vertex = v, len = range.len(), "memoized sequence");
        arena.slots.insert(key, range.clone());
        drop(arena);

        CachedSeq::Memo(Ref::map(self.arena.borrow(), |a| &a.buffer[range]))
    }
}

impl CachedGraph<true> {
    pub fn degree_out(&self, v: VertexId) -> usize {
        self.graph.degree_out(v)
    }

    pub fn degree_in(&self, v: VertexId) -> usize {
        self.graph.degree_in(v)
    }

    pub fn incident_edges_out(&self, v: VertexId) -> CachedSeq<'_> {
        self.memoized(MemoKind::EdgesOut, v, self.graph.incident_edges_out(v))
    }

    pub fn incident_edges_in(&self, v: VertexId) -> CachedSeq<'_> {
        self.memoized(MemoKind::EdgesIn, v, self.graph.incident_edges_in(v))
    }

    pub fn neighbours_out(&self, v: VertexId) -> CachedSeq<'_> {
        self.memoized(MemoKind::NeighboursOut, v, self.graph.neighbours_out(v))
    }

    pub fn neighbours_in(&self, v: VertexId) -> CachedSeq<'_> {
        self.memoized(MemoKind::NeighboursIn, v, self.graph.neighbours_in(v))
    }
}

impl CachedGraph<false> {
    pub fn degree(&self, v: VertexId) -> usize {
        self.graph.degree(v)
    }

    pub fn incident_edges(&self, v: VertexId) -> CachedSeq<'_> {
        self.memoized(MemoKind::Edges, v, self.graph.incident_edges(v))
    }

    pub fn neighbours(&self, v: VertexId) -> CachedSeq<'_> {
        self.memoized(MemoKind::Neighbours, v, self.graph.neighbours(v))
    }
}

impl GraphApi for CachedGraph<true> {
    const DIRECTED: bool = true;

    type Edges<'a> = CachedSeq<'a>;
    type Neighbours<'a> = CachedSeq<'a>;

    forward_graph_api_common!();
    forward_graph_api_directed!();
}

impl GraphApi for CachedGraph<false> {
    const DIRECTED: bool = false;

    type Edges<'a> = CachedSeq<'a>;
    type Neighbours<'a> = CachedSeq<'a>;

    forward_graph_api_common!();
    forward_graph_api_undirected!();
}

impl UndirectedApi for CachedGraph<false> {
    fn degree(&self, v: VertexId) -> usize {
        self.degree(v)
    }

    fn incident_edges(&self, v: VertexId) -> CachedSeq<'_> {
        self.incident_edges(v)
    }

    fn neighbours(&self, v: VertexId) -> CachedSeq<'_> {
        self.neighbours(v)
    }
}
