//! Graph algorithm error types.
//!
//! These errors mean an algorithm cannot run on the given input. A target
//! that simply has no path to it is not an error; results report that as an
//! infinite distance or `None`.

/// Errors from the generic graph algorithms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A node named by the caller is not in the graph
    #[error("unknown node: {node}")]
    UnknownNode { node: String },

    /// The graph has a directed cycle, so no topological order exists
    #[error("graph contains a cycle: only {ordered} of {total} nodes could be ordered")]
    Cycle { ordered: usize, total: usize },

    /// A negative-weight cycle is reachable from the source
    #[error("graph contains a negative-weight cycle reachable from the source")]
    NegativeCycle,
}

impl GraphError {
    pub(crate) fn unknown_node(node: &impl std::fmt::Debug) -> Self {
        GraphError::UnknownNode {
            node: format!("{node:?}"),
        }
    }
}
