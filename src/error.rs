//! Errors returned by the walkers and the exporter

use thiserror::Error;

/// Errors that can occur while walking or exporting a graph
///
/// Store mutations never fail: inserting a duplicate or deleting an absent
/// vertex/edge is a no-op.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Vertex {0} not found in the graph")]
    VertexNotFound(String),

    #[error("No path exists between {from} and {to}")]
    NoPathExists { from: String, to: String },

    #[error("Graph is not directed")]
    NotDirectedGraph,

    #[error("Cycle detected")]
    CycleDetected,

    #[error("No edge exists between {from} and {to}")]
    MissingEdge { from: String, to: String },

    #[error("Failed to write graph: {0}")]
    Io(#[from] std::io::Error),

    /// Error returned by a visitor, passed through unchanged
    #[error(transparent)]
    Visitor(#[from] anyhow::Error),
}

impl GraphError {
    pub(crate) fn vertex_not_found<K: std::fmt::Debug>(key: &K) -> Self {
        GraphError::VertexNotFound(format!("{:?}", key))
    }

    pub(crate) fn no_path<K: std::fmt::Debug>(from: &K, to: &K) -> Self {
        GraphError::NoPathExists {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    pub(crate) fn missing_edge<K: std::fmt::Debug>(from: &K, to: &K) -> Self {
        GraphError::MissingEdge {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }
}

pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GraphError::vertex_not_found(&42).to_string(),
            "Vertex 42 not found in the graph"
        );
        assert_eq!(
            GraphError::no_path(&"a", &"b").to_string(),
            "No path exists between \"a\" and \"b\""
        );
        assert_eq!(GraphError::CycleDetected.to_string(), "Cycle detected");
    }

    #[test]
    fn test_visitor_error_is_transparent() {
        let err: GraphError = anyhow::anyhow!("my custom error").into();
        assert_eq!(err.to_string(), "my custom error");
        assert!(matches!(err, GraphError::Visitor(_)));
    }
}
