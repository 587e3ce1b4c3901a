//! Dual-indexed in-memory graph storage.
//!
//! Edges live in insertion-ordered `(head, tail)` arrays and are indexed twice: once sorted by
//! `(head, tail)` and once by `(tail, head)`. Cumulative sums over both orders give O(1)
//! degrees and turn every incident-edge or neighbour query into a borrowed slice of an index.
//! Graphs are multigraphs: parallel edges and self-loops are kept as separate edges.
//!
//! ```
//! use dualgraph::{Sequence, UnGraph};
//!
//! let mut g = UnGraph::with_vertex_count(4);
//! g.add_edges([(0, 1), (2, 1), (1, 3)])?;
//! assert_eq!(g.degree(1), 3);
//! assert!(g.is_edge(1, 2));
//! assert_eq!(g.neighbours(1).to_vec(), vec![2, 3, 0]);
//! # Ok::<(), dualgraph::Error>(())
//! ```
//!
//! [`CachedGraph`] memoizes neighbour and incident-edge sequences on top of a [`Graph`], and
//! [`alg`] holds algorithms written against the [`GraphApi`] capability traits so they work
//! with either.

pub mod alg;
pub mod api;
pub mod cache;
pub mod error;
pub mod graph;
pub mod options;
pub mod seq;

pub use api::{GraphApi, UndirectedApi};
pub use cache::{CacheStats, CachedGraph, CachedSeq};
pub use error::{Error, Result};
pub use graph::{DiGraph, Graph, MAX_VERTEX_COUNT, UnGraph};
pub use options::GraphOptions;
pub use seq::{EdgeSeq, NeighbourSeq, SeqIter, Sequence};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Position of a vertex in `0..vertex_count`.
pub type VertexId = usize;

/// Position of an edge in insertion order.
pub type EdgeId = usize;
