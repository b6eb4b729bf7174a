use thiserror::Error;

/// Malformed input detected while reading a graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError<V> {
    /// A vertex was used (as source, or as an edge target) but is not a key
    /// of the graph.
    #[error("vertex {0:?} is not a key of the graph")]
    UnknownVertex(V),

    #[error("edge {from:?} -> {to:?} has invalid weight {weight}")]
    InvalidWeight { from: V, to: V, weight: f64 },
}
