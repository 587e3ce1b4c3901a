//! Finite, randomly indexable, restartable sequences of vertex or edge ids.
//!
//! Incident-edge queries hand out borrowed runs of the dual index; neighbour queries map those
//! runs through the endpoint arrays on the fly. Neither allocates.

use crate::{EdgeId, VertexId};
use std::iter::FusedIterator;

pub trait Sequence {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<usize>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A fresh iterator from the start; call again to restart.
    fn iter(&self) -> SeqIter<&Self> {
        SeqIter::new(self)
    }

    fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl Sequence for [usize] {
    fn len(&self) -> usize {
        <[usize]>::len(self)
    }

    fn get(&self, index: usize) -> Option<usize> {
        <[usize]>::get(self, index).copied()
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> Option<usize> {
        (**self).get(index)
    }
}

#[derive(Debug, Clone)]
pub struct SeqIter<S> {
    seq: S,
    front: usize,
    back: usize,
}

impl<S: Sequence> SeqIter<S> {
    pub fn new(seq: S) -> Self {
        let back = seq.len();
        Self {
            seq,
            front: 0,
            back,
        }
    }
}

impl<S: Sequence> Iterator for SeqIter<S> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.front >= self.back {
            return None;
        }
        let item = self.seq.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }

    fn nth(&mut self, n: usize) -> Option<usize> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<S: Sequence> DoubleEndedIterator for SeqIter<S> {
    fn next_back(&mut self) -> Option<usize> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.seq.get(self.back)
    }
}

impl<S: Sequence> ExactSizeIterator for SeqIter<S> {}

impl<S: Sequence> FusedIterator for SeqIter<S> {}

/// Edge ids of one bucket, or of two buckets back to back (undirected incidence).
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeSeq<'a> {
    first: &'a [EdgeId],
    second: &'a [EdgeId],
}

impl<'a> EdgeSeq<'a> {
    pub(crate) fn single(edges: &'a [EdgeId]) -> Self {
        Self {
            first: edges,
            second: &[],
        }
    }

    pub(crate) fn pair(first: &'a [EdgeId], second: &'a [EdgeId]) -> Self {
        Self { first, second }
    }

    pub fn as_slices(&self) -> (&'a [EdgeId], &'a [EdgeId]) {
        (self.first, self.second)
    }
}

impl Sequence for EdgeSeq<'_> {
    fn len(&self) -> usize {
        self.first.len() + self.second.len()
    }

    fn get(&self, index: usize) -> Option<usize> {
        match self.first.get(index) {
            Some(&e) => Some(e),
            None => self.second.get(index - self.first.len()).copied(),
        }
    }
}

impl<'a> IntoIterator for EdgeSeq<'a> {
    type Item = EdgeId;
    type IntoIter = SeqIter<EdgeSeq<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        SeqIter::new(self)
    }
}

/// The far endpoint of every edge in an [`EdgeSeq`].
///
/// Edges from the first run are mapped through `first_far`, edges from the second run through
/// `second_far` (the head array for a tail bucket and vice versa).
#[derive(Debug, Clone, Copy)]
pub struct NeighbourSeq<'a> {
    edges: EdgeSeq<'a>,
    first_far: &'a [VertexId],
    second_far: &'a [VertexId],
}

impl<'a> NeighbourSeq<'a> {
    pub(crate) fn new(
        edges: EdgeSeq<'a>,
        first_far: &'a [VertexId],
        second_far: &'a [VertexId],
    ) -> Self {
        Self {
            edges,
            first_far,
            second_far,
        }
    }

    pub fn edges(&self) -> EdgeSeq<'a> {
        self.edges
    }
}

impl Sequence for NeighbourSeq<'_> {
    fn len(&self) -> usize {
        self.edges.len()
    }

    fn get(&self, index: usize) -> Option<usize> {
        let (first, second) = self.edges.as_slices();
        match first.get(index) {
            Some(&e) => Some(self.first_far[e]),
            None => second
                .get(index - first.len())
                .map(|&e| self.second_far[e]),
        }
    }
}

impl<'a> IntoIterator for NeighbourSeq<'a> {
    type Item = VertexId;
    type IntoIter = SeqIter<NeighbourSeq<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        SeqIter::new(self)
    }
}
