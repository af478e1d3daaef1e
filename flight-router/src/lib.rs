//! Flight route planner.
//!
//! A library that answers: "Leaving this airport at this time, when is the
//! earliest I can reach that one on a weekly flight schedule?" It also
//! carries the general graph algorithms (topological sort, DAG shortest
//! paths, Bellman-Ford) used over weighted networks.

pub mod domain;
pub mod graph;
pub mod planner;
pub mod schedule;
