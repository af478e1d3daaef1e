//! Route planner using earliest-arrival search.
//!
//! This module answers: "If I am at this airport at this time, when is the
//! earliest I can be at that one, and on which flights?"
//!
//! Flights repeat weekly, so the search works on weekly offsets and pins
//! each flight it uses to a concrete occurrence as it goes.

mod config;
mod search;

pub use config::SearchConfig;
pub use search::{
    FlightProvider, Itinerary, Planner, SearchError, SearchRequest, earliest_arrival,
};
