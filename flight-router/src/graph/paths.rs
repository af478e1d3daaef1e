//! Single-source shortest path results.

use std::collections::HashMap;

use super::weighted::NodeId;

/// Distances and predecessors from one source to every node of a graph.
///
/// Built fresh by each query. A node with no finite distance is unreachable;
/// the source and unreachable nodes have no predecessor.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<N: NodeId> {
    pub source: N,
    pub distance: HashMap<N, f64>,
    pub predecessor: HashMap<N, N>,
}

impl<N: NodeId> ShortestPaths<N> {
    /// Distance to `node`, or infinity if unreachable or unknown.
    pub fn distance_to(&self, node: &N) -> f64 {
        self.distance.get(node).copied().unwrap_or(f64::INFINITY)
    }

    /// Returns true if `node` has a finite distance.
    pub fn is_reachable(&self, node: &N) -> bool {
        self.distance_to(node).is_finite()
    }

    /// Path from the source to `destination`, or `None` if unreachable.
    pub fn path_to(&self, destination: &N) -> Option<Vec<N>> {
        self.is_reachable(destination)
            .then(|| get_path(destination, &self.predecessor))
    }
}

/// Follow predecessor links back from `destination` and return the path in
/// forward order.
///
/// A node with no predecessor yields a single-node path, whether or not it
/// is the source; check reachability separately.
pub fn get_path<N: NodeId>(destination: &N, predecessor: &HashMap<N, N>) -> Vec<N> {
    let mut path = vec![destination.clone()];
    let mut current = destination;

    while let Some(prev) = predecessor.get(current) {
        // Predecessor trees are acyclic; this only guards malformed input.
        if path.len() > predecessor.len() {
            break;
        }
        path.push(prev.clone());
        current = prev;
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_follows_predecessors() {
        let predecessor = HashMap::from([("B", "A"), ("C", "B")]);
        assert_eq!(get_path(&"C", &predecessor), ["A", "B", "C"]);
    }

    #[test]
    fn node_without_predecessor_is_single_node_path() {
        let predecessor: HashMap<&str, &str> = HashMap::new();
        assert_eq!(get_path(&"Z", &predecessor), ["Z"]);
    }

    #[test]
    fn malformed_predecessor_loop_terminates() {
        let predecessor = HashMap::from([("A", "B"), ("B", "A")]);
        assert!(get_path(&"A", &predecessor).len() <= 3);
    }

    #[test]
    fn unreachable_distance_is_infinite() {
        let paths = ShortestPaths {
            source: "A",
            distance: HashMap::from([("A", 0.0), ("B", f64::INFINITY)]),
            predecessor: HashMap::new(),
        };
        assert_eq!(paths.distance_to(&"A"), 0.0);
        assert!(!paths.is_reachable(&"B"));
        assert!(!paths.is_reachable(&"unknown"));
        assert_eq!(paths.path_to(&"A"), Some(vec!["A"]));
        assert_eq!(paths.path_to(&"B"), None);
    }

    #[test]
    fn results_compare_by_value() {
        let build = || ShortestPaths {
            source: "A",
            distance: HashMap::from([("A", 0.0), ("B", 2.5)]),
            predecessor: HashMap::from([("B", "A")]),
        };
        assert_eq!(build(), build());

        let mut other = build();
        other.distance.insert("B", 3.0);
        assert_ne!(build(), other);
    }
}
