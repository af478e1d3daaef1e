//! Weekly flight schedule.
//!
//! Holds every recurring flight keyed by origin airport. The schedule is
//! filled once by an ingestion step (see [`loader`]) and then only read by
//! route queries.

pub mod loader;

use std::collections::{BTreeSet, HashMap};

use crate::domain::{Airport, InvalidAirport, RecurringFlight, TimeError, departure_arrival_minutes};
use crate::planner::{FlightProvider, Itinerary, SearchConfig, earliest_arrival};

/// Errors from adding a flight to the schedule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// Origin or destination is not a valid airport code
    #[error(transparent)]
    Airport(#[from] InvalidAirport),

    /// Day name or time of day could not be parsed
    #[error(transparent)]
    Time(#[from] TimeError),

    /// Departure minute is before the start of week zero
    #[error("flight {origin} -> {destination} departs before week zero (minute {departure})")]
    NegativeDeparture {
        origin: Airport,
        destination: Airport,
        departure: i64,
    },

    /// Arrival is not strictly after departure
    #[error("flight {origin} -> {destination} must take positive time, got {duration} minutes")]
    NonPositiveDuration {
        origin: Airport,
        destination: Airport,
        duration: i64,
    },
}

/// All recurring flights, grouped by origin.
#[derive(Debug, Clone, Default)]
pub struct ScheduleGraph {
    flights_from: HashMap<Airport, Vec<RecurringFlight>>,
    airports: BTreeSet<Airport>,
}

impl ScheduleGraph {
    /// Create an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a flight from departure and arrival minutes counted from the start
    /// of the week.
    ///
    /// The departure is folded into the week, so only its weekly offset and
    /// the flight time are kept. The arrival may lie beyond minute 10080 for
    /// flights that cross into the next week.
    ///
    /// # Errors
    ///
    /// Rejects a negative departure and a flight that does not arrive
    /// strictly after it departs; route search relies on positive durations.
    pub fn add_flight(
        &mut self,
        origin: Airport,
        destination: Airport,
        departure: i64,
        arrival: i64,
    ) -> Result<(), ScheduleError> {
        if departure < 0 {
            return Err(ScheduleError::NegativeDeparture {
                origin,
                destination,
                departure,
            });
        }
        let duration = arrival - departure;
        if duration <= 0 {
            return Err(ScheduleError::NonPositiveDuration {
                origin,
                destination,
                duration,
            });
        }

        self.airports.insert(origin);
        self.airports.insert(destination);
        self.flights_from
            .entry(origin)
            .or_default()
            .push(RecurringFlight::new(origin, destination, departure, duration));
        Ok(())
    }

    /// Add a flight from the fields of a schedule file row.
    ///
    /// `day` is a weekday name (full or 3-letter, any case) and `departure`
    /// an "HH:MM" time.
    ///
    /// ```
    /// use flight_router::schedule::ScheduleGraph;
    ///
    /// let mut schedule = ScheduleGraph::new();
    /// schedule.add_flight_from_csv("SUB", "CGK", "Monday", "08:00", 90).unwrap();
    ///
    /// let flight = schedule.all_flights()[0];
    /// assert_eq!(flight.departure_offset(), 480);
    /// assert_eq!(flight.duration_mins(), 90);
    /// ```
    pub fn add_flight_from_csv(
        &mut self,
        origin: &str,
        destination: &str,
        day: &str,
        departure: &str,
        duration_mins: i64,
    ) -> Result<(), ScheduleError> {
        let origin = Airport::parse(origin)?;
        let destination = Airport::parse(destination)?;
        let (depart, arrive) = departure_arrival_minutes(day, departure, duration_mins)?;
        self.add_flight(origin, destination, depart, arrive)
    }

    /// Flights departing from `airport`, in the order they were added.
    pub fn flights_from(&self, airport: &Airport) -> &[RecurringFlight] {
        self.flights_from
            .get(airport)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Every flight, ordered by weekly departure, then origin, then destination.
    pub fn all_flights(&self) -> Vec<RecurringFlight> {
        let mut all: Vec<RecurringFlight> = self.flights_from.values().flatten().copied().collect();
        all.sort_by_key(|f| (f.departure_offset(), f.origin(), f.destination(), f.duration_mins()));
        all
    }

    /// Every airport seen as an origin or destination, alphabetically.
    pub fn airports(&self) -> impl Iterator<Item = &Airport> {
        self.airports.iter()
    }

    /// Returns true if any flight starts or ends at `airport`.
    pub fn contains_airport(&self, airport: &Airport) -> bool {
        self.airports.contains(airport)
    }

    /// Number of recurring flights.
    pub fn flight_count(&self) -> usize {
        self.flights_from.values().map(Vec::len).sum()
    }

    /// Returns true if no flights have been added.
    pub fn is_empty(&self) -> bool {
        self.flights_from.is_empty()
    }

    /// Earliest arrival at `target` leaving `source` at absolute minute
    /// `start`, with at least `min_layover` minutes between flights.
    ///
    /// Searches two weeks ahead. An unreachable target gives
    /// [`Itinerary::unreachable`].
    pub fn earliest_arrival(
        &self,
        source: Airport,
        target: Airport,
        start: i64,
        min_layover: i64,
    ) -> Itinerary {
        let config = SearchConfig {
            min_layover_mins: min_layover,
            ..SearchConfig::default()
        };
        earliest_arrival(self, source, target, start, &config)
    }
}

impl FlightProvider for ScheduleGraph {
    fn departures(&self, airport: &Airport) -> &[RecurringFlight] {
        self.flights_from(airport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MINUTES_PER_WEEK;

    fn airport(s: &str) -> Airport {
        Airport::parse(s).unwrap()
    }

    #[test]
    fn empty_schedule() {
        let schedule = ScheduleGraph::new();
        assert!(schedule.is_empty());
        assert_eq!(schedule.flight_count(), 0);
        assert!(schedule.flights_from(&airport("SUB")).is_empty());
        assert_eq!(schedule.airports().count(), 0);
    }

    #[test]
    fn add_flight_keys_by_origin() {
        let mut schedule = ScheduleGraph::new();
        schedule.add_flight(airport("CGK"), airport("SIN"), 495, 615).unwrap();
        schedule.add_flight(airport("CGK"), airport("KUL"), 585, 675).unwrap();
        schedule.add_flight(airport("KUL"), airport("SIN"), 690, 780).unwrap();

        assert_eq!(schedule.flight_count(), 3);
        assert_eq!(schedule.flights_from(&airport("CGK")).len(), 2);
        assert_eq!(schedule.flights_from(&airport("KUL")).len(), 1);
        // Destination-only airports have no departures but are known
        assert!(schedule.flights_from(&airport("SIN")).is_empty());
        assert!(schedule.contains_airport(&airport("SIN")));
    }

    #[test]
    fn airports_are_sorted_and_unique() {
        let mut schedule = ScheduleGraph::new();
        schedule.add_flight(airport("SUB"), airport("CGK"), 480, 570).unwrap();
        schedule.add_flight(airport("CGK"), airport("DPS"), 600, 700).unwrap();

        let codes: Vec<&str> = schedule.airports().map(Airport::as_str).collect();
        assert_eq!(codes, ["CGK", "DPS", "SUB"]);
    }

    #[test]
    fn departure_is_stored_as_weekly_offset() {
        let mut schedule = ScheduleGraph::new();
        schedule
            .add_flight(airport("SUB"), airport("CGK"), MINUTES_PER_WEEK + 480, MINUTES_PER_WEEK + 570)
            .unwrap();

        let flight = schedule.flights_from(&airport("SUB"))[0];
        assert_eq!(flight.departure_offset(), 480);
        assert_eq!(flight.duration_mins(), 90);
    }

    #[test]
    fn rejects_non_positive_duration() {
        let mut schedule = ScheduleGraph::new();
        let err = schedule
            .add_flight(airport("SUB"), airport("CGK"), 480, 480)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "flight SUB -> CGK must take positive time, got 0 minutes"
        );
        assert!(schedule.add_flight(airport("SUB"), airport("CGK"), 480, 400).is_err());
        assert!(schedule.is_empty());
    }

    #[test]
    fn rejects_negative_departure() {
        let mut schedule = ScheduleGraph::new();
        let err = schedule
            .add_flight(airport("SUB"), airport("CGK"), -10, 50)
            .unwrap_err();
        assert!(matches!(err, ScheduleError::NegativeDeparture { .. }));
    }

    #[test]
    fn csv_fields_are_converted() {
        let mut schedule = ScheduleGraph::new();
        schedule
            .add_flight_from_csv("CGK", "DPS", "wed", "14:00", 110)
            .unwrap();

        let flight = schedule.flights_from(&airport("CGK"))[0];
        assert_eq!(flight.departure_offset(), 2 * 1440 + 840);
        assert_eq!(flight.duration_mins(), 110);
    }

    #[test]
    fn csv_overnight_sunday_flight() {
        let mut schedule = ScheduleGraph::new();
        schedule
            .add_flight_from_csv("SIN", "SYD", "Sunday", "23:30", 450)
            .unwrap();

        let flight = schedule.flights_from(&airport("SIN"))[0];
        assert_eq!(flight.departure_offset(), MINUTES_PER_WEEK - 30);
        assert_eq!(flight.duration_mins(), 450);
    }

    #[test]
    fn csv_errors() {
        let mut schedule = ScheduleGraph::new();
        assert!(matches!(
            schedule.add_flight_from_csv("S1B", "CGK", "Mon", "08:00", 90),
            Err(ScheduleError::Airport(_))
        ));
        assert!(matches!(
            schedule.add_flight_from_csv("SUB", "CGK", "Someday", "08:00", 90),
            Err(ScheduleError::Time(_))
        ));
        assert!(matches!(
            schedule.add_flight_from_csv("SUB", "CGK", "Mon", "8am", 90),
            Err(ScheduleError::Time(_))
        ));
        assert!(matches!(
            schedule.add_flight_from_csv("SUB", "CGK", "Mon", "08:00", 0),
            Err(ScheduleError::NonPositiveDuration { .. })
        ));
        assert!(schedule.is_empty());
    }

    #[test]
    fn csv_codes_in_any_case_share_an_airport() {
        let mut schedule = ScheduleGraph::new();
        schedule.add_flight_from_csv("sub", "cgk", "Mon", "08:00", 90).unwrap();
        schedule.add_flight_from_csv("Cgk", "SIN", "Mon", "10:00", 120).unwrap();

        assert_eq!(schedule.flights_from(&airport("CGK")).len(), 1);
        let codes: Vec<&str> = schedule.airports().map(Airport::as_str).collect();
        assert_eq!(codes, ["CGK", "SIN", "SUB"]);
    }

    #[test]
    fn all_flights_ordered_by_departure() {
        let mut schedule = ScheduleGraph::new();
        schedule.add_flight_from_csv("KUL", "SIN", "Tue", "11:30", 90).unwrap();
        schedule.add_flight_from_csv("SUB", "CGK", "Mon", "09:00", 90).unwrap();
        schedule.add_flight_from_csv("CGK", "SIN", "Mon", "09:00", 120).unwrap();

        let order: Vec<(Airport, i64)> = schedule
            .all_flights()
            .iter()
            .map(|f| (f.origin(), f.departure_offset()))
            .collect();
        assert_eq!(
            order,
            [
                (airport("CGK"), 540),
                (airport("SUB"), 540),
                (airport("KUL"), 1440 + 690)
            ]
        );
    }
}
