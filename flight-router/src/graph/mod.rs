//! Generic weighted graphs and shortest-path algorithms.
//!
//! Everything here works over any [`NodeId`] type. Algorithms only read the
//! graph; each call builds its own result, so one graph can serve many
//! queries (and many threads, as long as nobody mutates it meanwhile).

mod bellman_ford;
mod cycle;
mod dag;
mod error;
mod paths;
mod topo;
mod weighted;

pub use bellman_ford::{bellman_ford, shortest_distance, shortest_path};
pub use cycle::has_cycle;
pub use dag::dag_shortest_paths;
pub use error::GraphError;
pub use paths::{ShortestPaths, get_path};
pub use topo::{is_acyclic, topological_order};
pub use weighted::{Edge, NodeId, WeightedGraph};
