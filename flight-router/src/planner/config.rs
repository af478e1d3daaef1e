//! Search configuration for the route planner.

use chrono::Duration;

use crate::domain::MINUTES_PER_WEEK;

/// Configuration parameters for earliest-arrival search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Minimum time between arriving at an airport and boarding the next
    /// flight from it (minutes). Also applies before the first flight.
    pub min_layover_mins: i64,

    /// How many weeks past the start time to search.
    /// Flights departing or arriving later than this are ignored.
    pub horizon_weeks: i64,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(min_layover_mins: i64, horizon_weeks: i64) -> Self {
        Self {
            min_layover_mins,
            horizon_weeks,
        }
    }

    /// Returns the minimum layover as a Duration.
    pub fn min_layover(&self) -> Duration {
        Duration::minutes(self.min_layover_mins)
    }

    /// Returns the search horizon in minutes, saturating at `i64::MAX`.
    pub fn horizon_mins(&self) -> i64 {
        self.horizon_weeks.saturating_mul(MINUTES_PER_WEEK)
    }

    /// Returns the search horizon as a Duration.
    pub fn horizon(&self) -> Duration {
        Duration::minutes(self.horizon_mins())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_layover_mins: 60,
            horizon_weeks: 2,
        }
    }
}
