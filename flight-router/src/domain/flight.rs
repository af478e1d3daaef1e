//! Flight types.
//!
//! A `RecurringFlight` is a timetable entry that repeats every week. A
//! `FlightInstance` is one concrete occurrence of it, pinned to absolute
//! minutes, which is what an itinerary is built from.

use chrono::Duration;
use serde::Serialize;

use super::{Airport, MINUTES_PER_WEEK, WeekTime};

/// A flight that departs at the same point in every week.
///
/// # Invariants
///
/// - `departure_offset` is in `0..MINUTES_PER_WEEK`
/// - `duration_mins` is positive (enforced by schedule ingestion)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecurringFlight {
    origin: Airport,
    destination: Airport,
    departure_offset: i64,
    duration_mins: i64,
}

impl RecurringFlight {
    /// Create a recurring flight from a departure minute and a duration.
    ///
    /// Any departure minute is accepted and folded into the week, so
    /// `10080 + 480` and `480` describe the same flight.
    pub fn new(
        origin: Airport,
        destination: Airport,
        departure_minute: i64,
        duration_mins: i64,
    ) -> Self {
        Self {
            origin,
            destination,
            departure_offset: departure_minute.rem_euclid(MINUTES_PER_WEEK),
            duration_mins,
        }
    }

    /// Returns the departure airport.
    pub fn origin(&self) -> Airport {
        self.origin
    }

    /// Returns the arrival airport.
    pub fn destination(&self) -> Airport {
        self.destination
    }

    /// Minutes after Monday 00:00 at which this flight departs each week.
    pub fn departure_offset(&self) -> i64 {
        self.departure_offset
    }

    /// Flight time in minutes.
    pub fn duration_mins(&self) -> i64 {
        self.duration_mins
    }

    /// Returns the flight time as a Duration.
    pub fn duration(&self) -> Duration {
        Duration::minutes(self.duration_mins)
    }

    /// The first occurrence departing at or after `earliest`.
    ///
    /// Both the weekly offset and `earliest` are reduced modulo one week; if
    /// this week's departure has already gone, next week's is used.
    ///
    /// ```
    /// use flight_router::domain::{Airport, RecurringFlight};
    ///
    /// let sub = Airport::parse("SUB").unwrap();
    /// let cgk = Airport::parse("CGK").unwrap();
    /// // Mondays 08:00, 90 minutes
    /// let flight = RecurringFlight::new(sub, cgk, 480, 90);
    ///
    /// assert_eq!(flight.next_departure(480), 480);
    /// // Missed it by a minute: wait a week.
    /// assert_eq!(flight.next_departure(481), 480 + 10080);
    /// ```
    pub fn next_departure(&self, earliest: i64) -> i64 {
        let allowed_in_week = earliest.rem_euclid(MINUTES_PER_WEEK);
        let week_start = earliest - allowed_in_week;

        if self.departure_offset >= allowed_in_week {
            week_start + self.departure_offset
        } else {
            week_start + MINUTES_PER_WEEK + self.departure_offset
        }
    }

    /// Pin the occurrence departing at absolute minute `departure`.
    pub fn instance_at(&self, departure: i64) -> FlightInstance {
        FlightInstance {
            origin: self.origin,
            destination: self.destination,
            departure: WeekTime::new(departure),
            arrival: WeekTime::new(departure + self.duration_mins),
        }
    }
}

/// One concrete occurrence of a recurring flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FlightInstance {
    pub origin: Airport,
    pub destination: Airport,
    pub departure: WeekTime,
    pub arrival: WeekTime,
}

impl FlightInstance {
    /// Returns the flight time.
    pub fn duration(&self) -> Duration {
        self.departure.until(self.arrival)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The chosen occurrence is never before `earliest`, is less than a
        /// week after it, and lands on the flight's weekly offset.
        #[test]
        fn next_departure_is_first_occurrence(
            offset in 0i64..MINUTES_PER_WEEK,
            earliest in 0i64..(10 * MINUTES_PER_WEEK),
        ) {
            let f = RecurringFlight::new(
                Airport::parse("AAA").unwrap(),
                Airport::parse("BBB").unwrap(),
                offset,
                30,
            );
            let dep = f.next_departure(earliest);
            prop_assert!(dep >= earliest);
            prop_assert!(dep - earliest < MINUTES_PER_WEEK);
            prop_assert_eq!(dep.rem_euclid(MINUTES_PER_WEEK), offset);
        }
    }
}
