//! Insertion-ordered endpoint storage for [`Graph`](super::Graph).
//!
//! Edge `e` is `(heads[e], tails[e])`. Undirected stores keep every edge in its canonical
//! orientation (`head <= tail`), so each edge has exactly one stored form.

use crate::error::{Error, Result};
use crate::{EdgeId, VertexId};
use std::ops::Range;

#[derive(Debug, Clone, Default)]
pub(in crate::graph) struct EdgeStore<const DIRECTED: bool> {
    pub(in crate::graph) heads: Vec<VertexId>,
    pub(in crate::graph) tails: Vec<VertexId>,
}

impl<const DIRECTED: bool> EdgeStore<DIRECTED> {
    pub(in crate::graph) fn with_capacity(capacity: usize) -> Self {
        Self {
            heads: Vec::with_capacity(capacity),
            tails: Vec::with_capacity(capacity),
        }
    }

    pub(in crate::graph) fn canonical(head: VertexId, tail: VertexId) -> (VertexId, VertexId) {
        if DIRECTED || head <= tail {
            (head, tail)
        } else {
            (tail, head)
        }
    }

    fn checked(
        head: VertexId,
        tail: VertexId,
        vertex_count: usize,
    ) -> Result<(VertexId, VertexId)> {
        for vertex in [head, tail] {
            if vertex >= vertex_count {
                return Err(Error::InvalidVertex {
                    vertex,
                    vertex_count,
                });
            }
        }
        Ok(Self::canonical(head, tail))
    }

    pub(in crate::graph) fn len(&self) -> usize {
        self.heads.len()
    }

    pub(in crate::graph) fn edge(&self, id: EdgeId) -> Option<(VertexId, VertexId)> {
        Some((*self.heads.get(id)?, *self.tails.get(id)?))
    }

    pub(in crate::graph) fn append(
        &mut self,
        head: VertexId,
        tail: VertexId,
        vertex_count: usize,
    ) -> Result<EdgeId> {
        let (head, tail) = Self::checked(head, tail, vertex_count)?;
        let id = self.len();
        self.heads.push(head);
        self.tails.push(tail);
        Ok(id)
    }

    /// Appends a whole batch, or nothing at all if any pair names an invalid vertex.
    pub(in crate::graph) fn append_all<I>(
        &mut self,
        pairs: I,
        vertex_count: usize,
    ) -> Result<Range<EdgeId>>
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        let pairs = pairs
            .into_iter()
            .map(|(head, tail)| Self::checked(head, tail, vertex_count))
            .collect::<Result<Vec<_>>>()?;

        let start = self.len();
        self.heads.reserve(pairs.len());
        self.tails.reserve(pairs.len());
        for (head, tail) in pairs {
            self.heads.push(head);
            self.tails.push(tail);
        }
        Ok(start..self.len())
    }
}
