//! Shortest paths in a directed acyclic graph.
//!
//! Processing nodes in topological order means every predecessor of a node
//! is final before the node itself is expanded, so each edge is relaxed
//! exactly once. Negative weights are fine.

use std::collections::HashMap;

use tracing::debug;

use super::error::GraphError;
use super::paths::ShortestPaths;
use super::topo::topological_order;
use super::weighted::{NodeId, WeightedGraph};

/// Shortest distances from `source` to every node of a DAG.
///
/// # Errors
///
/// - [`GraphError::UnknownNode`] if `source` is not in the graph
/// - [`GraphError::Cycle`] if the graph is not acyclic
pub fn dag_shortest_paths<N: NodeId>(
    graph: &WeightedGraph<N>,
    source: &N,
) -> Result<ShortestPaths<N>, GraphError> {
    if !graph.contains_node(source) {
        return Err(GraphError::unknown_node(source));
    }

    let order = topological_order(graph)?;

    let mut distance: HashMap<N, f64> =
        graph.nodes().map(|n| (n.clone(), f64::INFINITY)).collect();
    let mut predecessor: HashMap<N, N> = HashMap::new();
    distance.insert(source.clone(), 0.0);

    for u in &order {
        let du = distance[u];
        if du == f64::INFINITY {
            continue;
        }

        for edge in graph.edges(u) {
            let candidate = du + edge.weight;
            if let Some(dv) = distance.get_mut(&edge.to) {
                if candidate < *dv {
                    *dv = candidate;
                    predecessor.insert(edge.to.clone(), u.clone());
                }
            }
        }
    }

    debug!(
        nodes = order.len(),
        reached = distance.values().filter(|d| d.is_finite()).count(),
        "DAG shortest paths computed"
    );

    Ok(ShortestPaths {
        source: source.clone(),
        distance,
        predecessor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> WeightedGraph<&'static str> {
        let mut g = WeightedGraph::new();
        g.add_edge("A", "B", 1.0);
        g.add_edge("B", "C", 2.0);
        g.add_edge("A", "C", 5.0);
        g
    }

    #[test]
    fn two_hops_beat_direct_edge() {
        let paths = dag_shortest_paths(&abc(), &"A").unwrap();

        assert_eq!(paths.distance_to(&"A"), 0.0);
        assert_eq!(paths.distance_to(&"B"), 1.0);
        assert_eq!(paths.distance_to(&"C"), 3.0);
        assert_eq!(paths.path_to(&"C").unwrap(), ["A", "B", "C"]);
        assert!(!paths.predecessor.contains_key(&"A"));
    }

    #[test]
    fn upstream_nodes_are_unreachable() {
        let paths = dag_shortest_paths(&abc(), &"B").unwrap();

        assert_eq!(paths.distance_to(&"C"), 2.0);
        assert_eq!(paths.distance_to(&"A"), f64::INFINITY);
        assert_eq!(paths.path_to(&"A"), None);
        assert!(!paths.predecessor.contains_key(&"A"));
    }

    #[test]
    fn negative_weights_allowed() {
        let mut g = WeightedGraph::new();
        g.add_edge("S", "A", 4.0);
        g.add_edge("S", "B", 1.0);
        g.add_edge("A", "T", -3.0);
        g.add_edge("B", "T", 1.0);

        let paths = dag_shortest_paths(&g, &"S").unwrap();
        assert_eq!(paths.distance_to(&"T"), 1.0);
        assert_eq!(paths.path_to(&"T").unwrap(), ["S", "A", "T"]);
    }

    #[test]
    fn cycle_is_propagated() {
        let mut g = abc();
        g.add_edge("C", "A", 1.0);
        let err = dag_shortest_paths(&g, &"A").unwrap_err();
        assert!(matches!(err, GraphError::Cycle { .. }));
    }

    #[test]
    fn unknown_source_is_an_error() {
        let err = dag_shortest_paths(&abc(), &"Z").unwrap_err();
        assert_eq!(err, GraphError::unknown_node(&"Z"));
    }

    #[test]
    fn graph_is_not_modified() {
        let g = abc();
        let before: Vec<_> = g.all_edges().map(|(u, e)| (*u, e.clone())).collect();
        dag_shortest_paths(&g, &"A").unwrap();
        let after: Vec<_> = g.all_edges().map(|(u, e)| (*u, e.clone())).collect();
        assert_eq!(before, after);
    }
}
