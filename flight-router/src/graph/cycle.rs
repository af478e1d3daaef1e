//! Directed cycle detection by depth-first search.
//!
//! Answers "is there a cycle?" without building an ordering. The DFS keeps
//! its own stack, so deep graphs cannot overflow the call stack.

use std::collections::HashMap;

use super::weighted::{NodeId, WeightedGraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the current DFS path
    Active,
    /// Fully explored
    Done,
}

/// Returns true if the graph contains a directed cycle.
///
/// Every node is tried as a DFS root, so cycles in any component are found.
/// A self-loop counts as a cycle of length one.
pub fn has_cycle<N: NodeId>(graph: &WeightedGraph<N>) -> bool {
    let mut marks: HashMap<&N, Mark> = HashMap::with_capacity(graph.node_count());
    // (node, index of the next outgoing edge to try)
    let mut stack: Vec<(&N, usize)> = Vec::new();

    for root in graph.nodes() {
        if marks.contains_key(root) {
            continue;
        }
        marks.insert(root, Mark::Active);
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            let Some(edge) = graph.edges(node).get(frame.1) else {
                marks.insert(node, Mark::Done);
                stack.pop();
                continue;
            };
            frame.1 += 1;

            match marks.get(&edge.to) {
                // Back-edge to an ancestor on the current path
                Some(Mark::Active) => return true,
                Some(Mark::Done) => {}
                None => {
                    marks.insert(&edge.to, Mark::Active);
                    stack.push((&edge.to, 0));
                }
            }
        }
    }

    false
}
