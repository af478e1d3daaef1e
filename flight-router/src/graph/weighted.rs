//! Weighted adjacency-list graph.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// Bound for graph node identifiers.
///
/// Anything cheap to clone with total equality and hashing qualifies:
/// small integers, `&'static str`, [`Airport`](crate::domain::Airport).
pub trait NodeId: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> NodeId for T {}

/// An outgoing edge. The origin is the node whose list holds it.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<N> {
    pub to: N,
    pub weight: f64,
}

/// A directed (or optionally undirected) graph with `f64` edge weights.
///
/// Adding an edge creates both endpoints, so nodes with only incoming edges
/// are still present. Parallel edges between the same pair are kept as
/// separate entries. Nodes are reported in insertion order, which keeps
/// every algorithm over the graph deterministic.
#[derive(Debug, Clone)]
pub struct WeightedGraph<N> {
    adjacency: HashMap<N, Vec<Edge<N>>>,
    order: Vec<N>,
    directed: bool,
}

impl<N: NodeId> Default for WeightedGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> WeightedGraph<N> {
    /// Create an empty directed graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
            order: Vec::new(),
            directed: true,
        }
    }

    /// Create an empty undirected graph. Every edge is stored in both directions.
    pub fn undirected() -> Self {
        Self {
            directed: false,
            ..Self::new()
        }
    }

    /// Returns true unless this graph mirrors its edges.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Add a node. Returns false if it was already present.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.order.push(node.clone());
        self.adjacency.insert(node, Vec::new());
        true
    }

    /// Add an edge `from -> to`, creating either endpoint if needed.
    ///
    /// In an undirected graph the mirror edge `to -> from` is added too
    /// (a self-loop is stored once).
    pub fn add_edge(&mut self, from: N, to: N, weight: f64) {
        self.add_node(from.clone());
        self.add_node(to.clone());

        if !self.directed && from != to {
            self.push_edge(&to, from.clone(), weight);
        }
        self.push_edge(&from, to, weight);
    }

    fn push_edge(&mut self, from: &N, to: N, weight: f64) {
        if let Some(edges) = self.adjacency.get_mut(from) {
            edges.push(Edge { to, weight });
        }
    }

    /// Remove every edge `from -> to` (and the mirrors in an undirected graph).
    ///
    /// Returns how many edges left `from`'s list. Both nodes stay in the graph.
    pub fn remove_edge(&mut self, from: &N, to: &N) -> usize {
        let removed = retain_edges(self.adjacency.get_mut(from), |e| &e.to != to);
        if !self.directed && from != to {
            retain_edges(self.adjacency.get_mut(to), |e| &e.to != from);
        }
        removed
    }

    /// Remove a node, its outgoing edges, and every edge pointing at it.
    ///
    /// Returns false if the node was not present.
    pub fn remove_node(&mut self, node: &N) -> bool {
        if self.adjacency.remove(node).is_none() {
            return false;
        }
        self.order.retain(|n| n != node);
        for edges in self.adjacency.values_mut() {
            edges.retain(|e| &e.to != node);
        }
        true
    }

    /// Returns true if the node is in the graph.
    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Neighbours of a node with their edge weights.
    ///
    /// An unknown node has no neighbours. Where parallel edges exist the
    /// most recently added one is reported; use [`edges`](Self::edges) to see
    /// all of them.
    pub fn neighbors(&self, node: &N) -> HashMap<N, f64> {
        self.edges(node)
            .iter()
            .map(|e| (e.to.clone(), e.weight))
            .collect()
    }

    /// Weight of the direct edge `from -> to`, if there is one.
    ///
    /// Agrees with [`neighbors`](Self::neighbors) when parallel edges exist.
    pub fn weight(&self, from: &N, to: &N) -> Option<f64> {
        self.edges(from)
            .iter()
            .rev()
            .find(|e| &e.to == to)
            .map(|e| e.weight)
    }

    /// Every outgoing edge of a node in insertion order, parallel edges included.
    pub fn edges(&self, node: &N) -> &[Edge<N>] {
        self.adjacency
            .get(node)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Weights of all parallel edges `from -> to`.
    pub fn edges_between<'a>(&'a self, from: &N, to: &'a N) -> impl Iterator<Item = f64> + 'a {
        self.edges(from)
            .iter()
            .filter(move |e| &e.to == to)
            .map(|e| e.weight)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.order.iter()
    }

    /// All nodes as a set.
    pub fn node_set(&self) -> HashSet<N> {
        self.order.iter().cloned().collect()
    }

    /// Every edge as `(origin, edge)`, grouped by origin in node order.
    pub fn all_edges(&self) -> impl Iterator<Item = (&N, &Edge<N>)> {
        self.order
            .iter()
            .flat_map(move |n| self.edges(n).iter().map(move |e| (n, e)))
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Number of stored edges (mirrors in an undirected graph count separately).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

fn retain_edges<N>(edges: Option<&mut Vec<Edge<N>>>, keep: impl Fn(&Edge<N>) -> bool) -> usize {
    match edges {
        Some(edges) => {
            let before = edges.len();
            edges.retain(keep);
            before - edges.len()
        }
        None => 0,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_edges() -> impl Strategy<Value = Vec<(u8, u8, i8)>> {
        proptest::collection::vec((0u8..12, 0u8..12, -5i8..10), 0..40)
    }

    proptest! {
        /// After removing a node it has no neighbours and nothing points at it.
        #[test]
        fn remove_node_leaves_no_trace(edges in arb_edges(), victim in 0u8..12) {
            let mut g = WeightedGraph::new();
            for (u, v, w) in edges {
                g.add_edge(u, v, f64::from(w));
            }
            g.remove_node(&victim);

            prop_assert!(g.neighbors(&victim).is_empty());
            prop_assert!(!g.contains_node(&victim));
            for n in g.nodes() {
                prop_assert!(!g.neighbors(n).contains_key(&victim));
            }
        }
    }
}
