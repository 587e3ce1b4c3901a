//! The capability contract generic graph algorithms are written against.
//!
//! Anything implementing [`GraphApi`] can be handed to [`crate::alg`]; undirected
//! implementations additionally provide the unified accessors of [`UndirectedApi`], and
//! their in/out accessors return exactly what the unified ones do.

use crate::error::Result;
use crate::seq::Sequence;
use crate::{EdgeId, VertexId};
use std::ops::Range;

pub trait GraphApi {
    const DIRECTED: bool;

    type Edges<'a>: Sequence
    where
        Self: 'a;

    type Neighbours<'a>: Sequence
    where
        Self: 'a;

    fn vertex_count(&self) -> usize;

    fn set_vertex_count(&mut self, vertex_count: usize) -> Result<()>;

    fn edge_count(&self) -> usize;

    fn edge(&self, id: EdgeId) -> Option<(VertexId, VertexId)>;

    fn is_edge(&self, head: VertexId, tail: VertexId) -> bool;

    fn edge_id(&self, head: VertexId, tail: VertexId) -> Result<EdgeId>;

    fn add_edge(&mut self, head: VertexId, tail: VertexId) -> Result<EdgeId>;

    fn add_edges<I>(&mut self, pairs: I) -> Result<Range<EdgeId>>
    where
        I: IntoIterator<Item = (VertexId, VertexId)>;

    fn degree_in(&self, v: VertexId) -> usize;

    fn degree_out(&self, v: VertexId) -> usize;

    fn incident_edges_in(&self, v: VertexId) -> Self::Edges<'_>;

    fn incident_edges_out(&self, v: VertexId) -> Self::Edges<'_>;

    fn neighbours_in(&self, v: VertexId) -> Self::Neighbours<'_>;

    fn neighbours_out(&self, v: VertexId) -> Self::Neighbours<'_>;
}

pub trait UndirectedApi: GraphApi {
    fn degree(&self, v: VertexId) -> usize;

    fn incident_edges(&self, v: VertexId) -> Self::Edges<'_>;

    fn neighbours(&self, v: VertexId) -> Self::Neighbours<'_>;
}

/// Implements the parts of [`GraphApi`] that do not depend on direction by forwarding to
/// inherent methods of the same name.
macro_rules! forward_graph_api_common {
    () => {
        fn vertex_count(&self) -> usize {
            self.vertex_count()
        }

        fn set_vertex_count(&mut self, vertex_count: usize) -> $crate::Result<()> {
            self.set_vertex_count(vertex_count)
        }

        fn edge_count(&self) -> usize {
            self.edge_count()
        }

        fn edge(&self, id: $crate::EdgeId) -> Option<($crate::VertexId, $crate::VertexId)> {
            self.edge(id)
        }

        fn is_edge(&self, head: $crate::VertexId, tail: $crate::VertexId) -> bool {
            self.is_edge(head, tail)
        }

        fn edge_id(
            &self,
            head: $crate::VertexId,
            tail: $crate::VertexId,
        ) -> $crate::Result<$crate::EdgeId> {
            self.edge_id(head, tail)
        }

        fn add_edge(
            &mut self,
            head: $crate::VertexId,
            tail: $crate::VertexId,
        ) -> $crate::Result<$crate::EdgeId> {
            self.add_edge(head, tail)
        }

        fn add_edges<I>(&mut self, pairs: I) -> $crate::Result<std::ops::Range<$crate::EdgeId>>
        where
            I: IntoIterator<Item = ($crate::VertexId, $crate::VertexId)>,
        {
            self.add_edges(pairs)
        }
    };
}

/// Fills in the direction-specific half of [`GraphApi`] for an undirected type: every in/out
/// accessor is the unified one.
macro_rules! forward_graph_api_undirected {
    () => {
        fn degree_in(&self, v: $crate::VertexId) -> usize {
            self.degree(v)
        }

        fn degree_out(&self, v: $crate::VertexId) -> usize {
            self.degree(v)
        }

        fn incident_edges_in(&self, v: $crate::VertexId) -> Self::Edges<'_> {
            self.incident_edges(v)
        }

        fn incident_edges_out(&self, v: $crate::VertexId) -> Self::Edges<'_> {
            self.incident_edges(v)
        }

        fn neighbours_in(&self, v: $crate::VertexId) -> Self::Neighbours<'_> {
            self.neighbours(v)
        }

        fn neighbours_out(&self, v: $crate::VertexId) -> Self::Neighbours<'_> {
            self.neighbours(v)
        }
    };
}

/// The directed counterpart of [`forward_graph_api_undirected`].
macro_rules! forward_graph_api_directed {
    () => {
        fn degree_in(&self, v: $crate::VertexId) -> usize {
            self.degree_in(v)
        }

        fn degree_out(&self, v: $crate::VertexId) -> usize {
            self.degree_out(v)
        }

        fn incident_edges_in(&self, v: $crate::VertexId) -> Self::Edges<'_> {
            self.incident_edges_in(v)
        }

        fn incident_edges_out(&self, v: $crate::VertexId) -> Self::Edges<'_> {
            self.incident_edges_out(v)
        }

        fn neighbours_in(&self, v: $crate::VertexId) -> Self::Neighbours<'_> {
            self.neighbours_in(v)
        }

        fn neighbours_out(&self, v: $crate::VertexId) -> Self::Neighbours<'_> {
            self.neighbours_out(v)
        }
    };
}

pub(crate) use {forward_graph_api_common, forward_graph_api_directed, forward_graph_api_undirected};
