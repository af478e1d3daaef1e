//! Topological ordering with Kahn's algorithm.

use std::collections::{HashMap, VecDeque};

use super::error::GraphError;
use super::weighted::{NodeId, WeightedGraph};

/// Order the nodes so every edge points forward.
///
/// Nodes that are ready at the same time are taken in the graph's node
/// order, so the result is stable for an unchanged graph. Callers must not
/// read meaning into the order among such ties.
///
/// # Errors
///
/// Returns [`GraphError::Cycle`] if fewer nodes could be ordered than the
/// graph holds, which happens exactly when there is a directed cycle.
pub fn topological_order<N: NodeId>(graph: &WeightedGraph<N>) -> Result<Vec<N>, GraphError> {
    let mut in_degree: HashMap<&N, usize> = graph.nodes().map(|n| (n, 0)).collect();
    for (_, edge) in graph.all_edges() {
        if let Some(deg) = in_degree.get_mut(&edge.to) {
            *deg += 1;
        }
    }

    let mut queue: VecDeque<&N> = graph.nodes().filter(|n| in_degree[n] == 0).collect();
    let mut order = Vec::with_capacity(graph.node_count());

    while let Some(node) = queue.pop_front() {
        order.push(node.clone());

        for edge in graph.edges(node) {
            if let Some(deg) = in_degree.get_mut(&edge.to) {
                *deg -= 1;
                if *deg == 0 {
                    queue.push_back(&edge.to);
                }
            }
        }
    }

    if order.len() != graph.node_count() {
        return Err(GraphError::Cycle {
            ordered: order.len(),
            total: graph.node_count(),
        });
    }

    Ok(order)
}

/// Returns true if the graph has no directed cycle.
pub fn is_acyclic<N: NodeId>(graph: &WeightedGraph<N>) -> bool {
    topological_order(graph).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position<N: PartialEq>(order: &[N], node: N) -> usize {
        order.iter().position(|n| *n == node).unwrap()
    }

    #[test]
    fn empty_graph_is_acyclic() {
        let g: WeightedGraph<u32> = WeightedGraph::new();
        assert_eq!(topological_order(&g).unwrap(), Vec::<u32>::new());
        assert!(is_acyclic(&g));
    }

    #[test]
    fn orders_a_chain() {
        let mut g = WeightedGraph::new();
        g.add_edge("C", "D", 1.0);
        g.add_edge("B", "C", 1.0);
        g.add_edge("A", "B", 1.0);

        assert_eq!(topological_order(&g).unwrap(), ["A", "B", "C", "D"]);
    }

    #[test]
    fn every_edge_points_forward() {
        let mut g = WeightedGraph::new();
        g.add_edge("A", "B", 1.0);
        g.add_edge("A", "C", 1.0);
        g.add_edge("B", "D", 1.0);
        g.add_edge("C", "D", 1.0);
        g.add_node("E");

        let order = topological_order(&g).unwrap();
        assert_eq!(order.len(), 5);
        for (u, e) in g.all_edges() {
            assert!(position(&order, *u) < position(&order, e.to));
        }
    }

    #[test]
    fn parallel_edges_do_not_block_ordering() {
        let mut g = WeightedGraph::new();
        g.add_edge(1, 2, 1.0);
        g.add_edge(1, 2, 2.0);
        assert_eq!(topological_order(&g).unwrap(), [1, 2]);
    }

    #[test]
    fn cycle_is_reported() {
        let mut g = WeightedGraph::new();
        g.add_edge("S", "A", 1.0);
        g.add_edge("A", "B", 1.0);
        g.add_edge("B", "A", 1.0);

        let err = topological_order(&g).unwrap_err();
        assert_eq!(
            err,
            GraphError::Cycle {
                ordered: 1,
                total: 3
            }
        );
        assert!(!is_acyclic(&g));
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let mut g = WeightedGraph::new();
        g.add_edge(1, 1, 0.0);
        assert!(!is_acyclic(&g));
    }

    #[test]
    fn undirected_edge_is_a_cycle() {
        let mut g = WeightedGraph::undirected();
        g.add_edge(1, 2, 1.0);
        assert!(!is_acyclic(&g));
    }

    #[test]
    fn repeated_calls_agree() {
        let mut g = WeightedGraph::new();
        for (u, v) in [(5, 1), (5, 2), (1, 3), (2, 3), (4, 3)] {
            g.add_edge(u, v, 1.0);
        }
        assert_eq!(topological_order(&g).unwrap(), topological_order(&g).unwrap());
    }
}
