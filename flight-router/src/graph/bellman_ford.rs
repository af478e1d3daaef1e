//! Bellman-Ford shortest paths.
//!
//! Works with negative edge weights and reports negative cycles reachable
//! from the source instead of returning a meaningless answer.

use std::collections::HashMap;

use tracing::{debug, trace};

use super::error::GraphError;
use super::paths::{ShortestPaths, get_path};
use super::weighted::{NodeId, WeightedGraph};

/// Shortest distances from `source` to every node.
///
/// Runs at most `|V| - 1` relaxation passes over every edge, stopping early
/// once a pass changes nothing, then makes one more pass: any edge that
/// still relaxes proves a negative cycle reachable from `source`.
///
/// # Errors
///
/// - [`GraphError::UnknownNode`] if `source` is not in the graph
/// - [`GraphError::NegativeCycle`] if a negative cycle is reachable
pub fn bellman_ford<N: NodeId>(
    graph: &WeightedGraph<N>,
    source: &N,
) -> Result<ShortestPaths<N>, GraphError> {
    if !graph.contains_node(source) {
        return Err(GraphError::unknown_node(source));
    }

    let mut distance: HashMap<N, f64> =
        graph.nodes().map(|n| (n.clone(), f64::INFINITY)).collect();
    let mut predecessor: HashMap<N, N> = HashMap::new();
    distance.insert(source.clone(), 0.0);

    let max_passes = graph.node_count().saturating_sub(1);
    let mut passes = 0;
    while passes < max_passes {
        passes += 1;
        let mut updated = false;

        for (u, edge) in graph.all_edges() {
            let du = distance[u];
            if du == f64::INFINITY {
                continue;
            }
            let candidate = du + edge.weight;
            if let Some(dv) = distance.get_mut(&edge.to) {
                if candidate < *dv {
                    *dv = candidate;
                    predecessor.insert(edge.to.clone(), u.clone());
                    updated = true;
                }
            }
        }

        trace!(pass = passes, updated, "relaxation pass");
        if !updated {
            break;
        }
    }

    for (u, edge) in graph.all_edges() {
        let du = distance[u];
        if du != f64::INFINITY && du + edge.weight < distance[&edge.to] {
            debug!(from = ?u, to = ?edge.to, "negative cycle detected");
            return Err(GraphError::NegativeCycle);
        }
    }

    debug!(passes, nodes = graph.node_count(), "Bellman-Ford converged");

    Ok(ShortestPaths {
        source: source.clone(),
        distance,
        predecessor,
    })
}

/// Shortest path from `source` to `destination`.
///
/// Returns `Ok(None)` when `destination` cannot be reached; that is a
/// normal outcome, not an error.
///
/// # Errors
///
/// - [`GraphError::UnknownNode`] if either endpoint is not in the graph
/// - [`GraphError::NegativeCycle`] if a negative cycle is reachable from `source`
pub fn shortest_path<N: NodeId>(
    graph: &WeightedGraph<N>,
    source: &N,
    destination: &N,
) -> Result<Option<Vec<N>>, GraphError> {
    if !graph.contains_node(destination) {
        return Err(GraphError::unknown_node(destination));
    }

    let paths = bellman_ford(graph, source)?;
    if !paths.is_reachable(destination) {
        return Ok(None);
    }
    Ok(Some(get_path(destination, &paths.predecessor)))
}

/// Length of the shortest path from `source` to `destination`.
///
/// The length is summed from the edges of the reconstructed path; where
/// parallel edges join two consecutive nodes the lightest one counts.
/// Unreachable destinations give infinity.
///
/// # Errors
///
/// Same as [`shortest_path`].
pub fn shortest_distance<N: NodeId>(
    graph: &WeightedGraph<N>,
    source: &N,
    destination: &N,
) -> Result<f64, GraphError> {
    let Some(path) = shortest_path(graph, source, destination)? else {
        return Ok(f64::INFINITY);
    };

    let total: f64 = path
        .windows(2)
        .map(|pair| {
            graph
                .edges_between(&pair[0], &pair[1])
                .reduce(f64::min)
                .unwrap_or(f64::INFINITY)
        })
        .sum();

    Ok(total)
}
