//! Graph configuration options.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphOptions {
    /// Number of vertices the graph starts with, at most
    /// [`MAX_VERTEX_COUNT`](crate::MAX_VERTEX_COUNT).
    pub vertex_count: usize,
    /// Capacity reserved up front for the endpoint and index arrays.
    pub edge_capacity: usize,
    /// `add_edges` batches no larger than this are inserted one edge at a time
    /// (binary search + shift); larger batches append and re-sort both indices.
    pub incremental_batch_limit: usize,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            vertex_count: 0,
            edge_capacity: 0,
            incremental_batch_limit: 1,
        }
    }
}
