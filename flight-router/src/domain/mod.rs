//! Domain types for the flight router.
//!
//! This module contains the value types shared by the schedule store and
//! the route planner. Types validate their invariants at construction
//! time, so code that receives them can trust their validity.

mod airport;
mod flight;
mod time;

pub use airport::{Airport, InvalidAirport};
pub use flight::{FlightInstance, RecurringFlight};
pub use time::{
    MINUTES_PER_DAY, MINUTES_PER_WEEK, TimeError, WeekTime, day_and_time_to_week_minute, day_name,
    departure_arrival_minutes, parse_day, parse_hhmm, week_minute, week_minute_to_day_and_time,
};
