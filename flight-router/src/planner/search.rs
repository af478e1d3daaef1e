//! Earliest-arrival search over a weekly schedule.
//!
//! The schedule describes each flight once, by its weekly offset. Searching
//! it is a shortest-path problem on a time-expanded graph where every
//! airport is copied for every minute and every flight for every week. That
//! graph is never built: when an airport is expanded at time `t`, each of
//! its flights is pinned to the first weekly occurrence the traveller can
//! still catch, and only that occurrence becomes an edge.
//!
//! Label: the earliest known arrival time per airport. Flight durations are
//! positive and waiting never helps, so labels behave like Dijkstra
//! distances and the first time the target is popped it is optimal.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;
use tracing::{debug, trace};

use crate::domain::{Airport, FlightInstance, MINUTES_PER_WEEK, RecurringFlight, WeekTime};

use super::config::SearchConfig;

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Invalid search request or configuration
    #[error("invalid search request: {0}")]
    InvalidRequest(String),
}

/// Source of recurring flights for the planner.
///
/// This abstraction lets the planner run against any schedule store,
/// including hand-built ones in tests.
pub trait FlightProvider {
    /// Flights departing from `airport`, in a stable order.
    fn departures(&self, airport: &Airport) -> &[RecurringFlight];
}

/// Request for earliest-arrival search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Where the traveller starts.
    pub source: Airport,

    /// Where the traveller wants to be.
    pub target: Airport,

    /// When the traveller is at `source` and ready to go.
    pub start: WeekTime,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(source: Airport, target: Airport, start: WeekTime) -> Self {
        Self {
            source,
            target,
            start,
        }
    }

    /// Validate the search request.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.start.minutes() < 0 {
            return Err(SearchError::InvalidRequest(
                "start time is before week zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Result of an earliest-arrival search.
///
/// An unreachable target has no arrival time and empty airport and flight
/// lists. Otherwise `airports` runs from source to target and `flights`
/// holds the concrete occurrence used for each hop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Itinerary {
    pub airports: Vec<Airport>,
    pub flights: Vec<FlightInstance>,
    pub arrival: Option<WeekTime>,
}

impl Itinerary {
    /// The "no route" result.
    pub fn unreachable() -> Self {
        Self {
            airports: Vec::new(),
            flights: Vec::new(),
            arrival: None,
        }
    }

    /// Returns true if a route was found.
    pub fn is_reachable(&self) -> bool {
        self.arrival.is_some()
    }

    /// Number of changes of aircraft (one fewer than flights taken).
    pub fn change_count(&self) -> usize {
        self.flights.len().saturating_sub(1)
    }
}

/// Earliest-arrival planner.
pub struct Planner<'a, P: FlightProvider> {
    provider: &'a P,
    config: &'a SearchConfig,
}

impl<'a, P: FlightProvider> Planner<'a, P> {
    /// Create a new planner.
    pub fn new(provider: &'a P, config: &'a SearchConfig) -> Self {
        Self { provider, config }
    }

    /// Validate the request and configuration, then search.
    pub fn search(&self, request: &SearchRequest) -> Result<Itinerary, SearchError> {
        request.validate()?;

        if self.config.min_layover_mins < 0 {
            return Err(SearchError::InvalidRequest(
                "minimum layover cannot be negative".to_string(),
            ));
        }
        if self.config.horizon_weeks < 1 {
            return Err(SearchError::InvalidRequest(
                "search horizon must be at least one week".to_string(),
            ));
        }
        // A departure can roll up to one week past the horizon before it is
        // pruned, so that instant must still be representable.
        let latest = request
            .start
            .minutes()
            .checked_add(self.config.horizon_mins())
            .and_then(|t| t.checked_add(MINUTES_PER_WEEK));
        if latest.is_none() {
            return Err(SearchError::InvalidRequest(
                "search horizon reaches past the latest representable time".to_string(),
            ));
        }

        Ok(earliest_arrival(
            self.provider,
            request.source,
            request.target,
            request.start.minutes(),
            self.config,
        ))
    }
}

/// Earliest arrival at `target` for a traveller at `source` from absolute
/// minute `start`.
///
/// Nothing past `start` plus the configured horizon is considered. A layover
/// or flight time too large to add to the clock simply makes that flight
/// uncatchable. The inputs are not otherwise validated; see
/// [`Planner::search`] for the checked entry point.
pub fn earliest_arrival<P: FlightProvider + ?Sized>(
    provider: &P,
    source: Airport,
    target: Airport,
    start: i64,
    config: &SearchConfig,
) -> Itinerary {
    let max_time = start.saturating_add(config.horizon_mins());
    let min_layover = config.min_layover_mins;

    let mut best: HashMap<Airport, i64> = HashMap::from([(source, start)]);
    // The flight occurrence that set each airport's best time; its origin
    // is the predecessor airport.
    let mut via: HashMap<Airport, FlightInstance> = HashMap::new();
    let mut queue = BinaryHeap::from([Reverse((start, source))]);
    let mut expanded = 0usize;

    while let Some(Reverse((time, airport))) = queue.pop() {
        let known = best.get(&airport).copied().unwrap_or(i64::MAX);
        if time > known {
            continue; // stale
        }
        if airport == target {
            break;
        }
        if time > max_time {
            continue;
        }

        expanded += 1;
        // Every departure is at or after `ready`, so nothing is catchable
        // once it passes the horizon.
        let ready = match time.checked_add(min_layover) {
            Some(ready) if ready <= max_time => ready,
            _ => continue,
        };
        trace!(%airport, time, "expanding");

        for flight in provider.departures(&airport) {
            let departure = flight.next_departure(ready);
            if departure > max_time {
                continue;
            }
            let arrival = match departure.checked_add(flight.duration_mins()) {
                Some(arrival) if arrival <= max_time => arrival,
                _ => continue,
            };
            let instance = flight.instance_at(departure);

            let destination = flight.destination();
            if arrival < best.get(&destination).copied().unwrap_or(i64::MAX) {
                best.insert(destination, arrival);
                via.insert(destination, instance);
                queue.push(Reverse((arrival, destination)));
            }
        }
    }

    debug!(
        %source,
        %target,
        start,
        expanded,
        reached = best.len(),
        "earliest-arrival search finished"
    );

    match best.get(&target) {
        Some(&arrival) => reconstruct(source, target, arrival, &via),
        None => Itinerary::unreachable(),
    }
}

/// Walk the flights that set each best time back from `target` to `source`.
fn reconstruct(
    source: Airport,
    target: Airport,
    arrival: i64,
    via: &HashMap<Airport, FlightInstance>,
) -> Itinerary {
    let mut airports = vec![target];
    let mut flights = Vec::new();
    let mut current = target;

    while current != source {
        let Some(flight) = via.get(&current) else {
            break;
        };
        // Each hop strictly decreases time, so this cannot loop; the bound
        // only protects against a provider with non-positive durations.
        if flights.len() > via.len() {
            break;
        }
        flights.push(*flight);
        current = flight.origin;
        airports.push(current);
    }

    airports.reverse();
    flights.reverse();

    Itinerary {
        airports,
        flights,
        arrival: Some(WeekTime::new(arrival)),
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
