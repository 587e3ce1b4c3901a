use crate::VertexId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("vertex {vertex} is out of range (vertex count is {vertex_count})")]
    InvalidVertex {
        vertex: VertexId,
        vertex_count: usize,
    },

    #[error("({head}, {tail}) is not an edge")]
    EdgeNotFound { head: VertexId, tail: VertexId },

    #[error("({vertex}, _) is not an edge: vertex {vertex} has no outgoing edges")]
    NoOutgoingEdges { vertex: VertexId },

    #[error("(_, {vertex}) is not an edge: vertex {vertex} has no incoming edges")]
    NoIncomingEdges { vertex: VertexId },

    #[error("vertex count {requested} exceeds the maximum of {max}")]
    VertexCountTooLarge { requested: usize, max: usize },

    #[error(
        "cannot shrink vertex count from {vertex_count} to {requested}: removed vertices still have edges"
    )]
    VertexCountShrink {
        requested: usize,
        vertex_count: usize,
    },
}

impl Error {
    /// True for every flavour of failed `(head, tail)` lookup.
    pub fn is_edge_not_found(&self) -> bool {
        matches!(
            self,
            Error::EdgeNotFound { .. } | Error::NoOutgoingEdges { .. } | Error::NoIncomingEdges { .. }
        )
    }
}
