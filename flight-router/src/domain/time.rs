//! Weekly time handling for recurring schedules.
//!
//! Schedules describe flights by weekday and "HH:MM" time of day. Internally
//! every instant is an integer count of minutes since Monday 00:00 of an
//! arbitrary week zero. Offsets in `0..MINUTES_PER_WEEK` are positions inside
//! one week; larger values are absolute instants in later weeks.

use std::fmt;

use chrono::{Duration, NaiveTime, Timelike, Weekday};
use serde::Serialize;

/// Minutes in one day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Minutes in one week. Recurring flights repeat with this period.
pub const MINUTES_PER_WEEK: i64 = 7 * MINUTES_PER_DAY;

/// Error returned when parsing an invalid day name or time of day.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field} {value:?}: {reason}")]
pub struct TimeError {
    field: &'static str,
    value: String,
    reason: &'static str,
}

impl TimeError {
    fn day(value: &str, reason: &'static str) -> Self {
        Self {
            field: "day",
            value: value.to_string(),
            reason,
        }
    }

    fn time(value: &str, reason: &'static str) -> Self {
        Self {
            field: "time",
            value: value.to_string(),
            reason,
        }
    }
}

/// Parse a day name, case-insensitively, in full or 3-letter form.
///
/// ```
/// use chrono::Weekday;
/// use flight_router::domain::parse_day;
///
/// assert_eq!(parse_day("Monday").unwrap(), Weekday::Mon);
/// assert_eq!(parse_day("sun").unwrap(), Weekday::Sun);
/// assert_eq!(parse_day(" WED ").unwrap(), Weekday::Wed);
/// assert!(parse_day("Tues").is_err());
/// ```
pub fn parse_day(s: &str) -> Result<Weekday, TimeError> {
    s.trim()
        .parse::<Weekday>()
        .map_err(|_| TimeError::day(s, "expected a weekday name such as Monday or Mon"))
}

/// Parse an "HH:MM" time of day into minutes after midnight.
///
/// A single-digit hour ("9:05") is accepted; minutes must have two digits.
pub fn parse_hhmm(s: &str) -> Result<i64, TimeError> {
    let trimmed = s.trim();
    let (hours, minutes) = trimmed
        .split_once(':')
        .ok_or_else(|| TimeError::time(s, "expected HH:MM format"))?;

    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return Err(TimeError::time(s, "expected HH:MM format"));
    }

    let hour = parse_digits(hours).ok_or_else(|| TimeError::time(s, "invalid hour digits"))?;
    let minute = parse_digits(minutes).ok_or_else(|| TimeError::time(s, "invalid minute digits"))?;

    let time = NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| TimeError::time(s, "hour must be 0-23 and minute 0-59"))?;

    Ok(i64::from(time.hour()) * 60 + i64::from(time.minute()))
}

fn parse_digits(s: &str) -> Option<u32> {
    s.bytes().try_fold(0u32, |acc, b| {
        (b as char).to_digit(10).map(|d| acc * 10 + d)
    })
}

/// Minute offset into the week for a weekday and a minute of that day.
pub fn week_minute(day: Weekday, minute_of_day: i64) -> i64 {
    i64::from(day.num_days_from_monday()) * MINUTES_PER_DAY + minute_of_day
}

/// Convert a day name and "HH:MM" time into a weekly offset.
///
/// ```
/// use flight_router::domain::day_and_time_to_week_minute;
///
/// assert_eq!(day_and_time_to_week_minute("Monday", "08:00").unwrap(), 480);
/// assert_eq!(day_and_time_to_week_minute("Tue", "00:30").unwrap(), 1470);
/// ```
pub fn day_and_time_to_week_minute(day: &str, hhmm: &str) -> Result<i64, TimeError> {
    Ok(week_minute(parse_day(day)?, parse_hhmm(hhmm)?))
}

/// Convert a day name, departure time and duration into `(departure, arrival)`
/// week minutes.
///
/// The arrival is not folded back into the week: a Sunday-night flight that
/// lands on Monday morning arrives after minute 10080.
pub fn departure_arrival_minutes(
    day: &str,
    hhmm: &str,
    duration_minutes: i64,
) -> Result<(i64, i64), TimeError> {
    let departure = day_and_time_to_week_minute(day, hhmm)?;
    Ok((departure, departure + duration_minutes))
}

/// Convert any minute value into its weekday and "HH:MM" time of day.
///
/// Values outside `0..MINUTES_PER_WEEK` (including negative ones) are folded
/// into the week first.
///
/// ```
/// use flight_router::domain::week_minute_to_day_and_time;
///
/// assert_eq!(week_minute_to_day_and_time(570), ("Monday", "09:30".to_string()));
/// assert_eq!(week_minute_to_day_and_time(10080 + 1470), ("Tuesday", "00:30".to_string()));
/// ```
pub fn week_minute_to_day_and_time(minute: i64) -> (&'static str, String) {
    let time = WeekTime::new(minute);
    (day_name(time.weekday()), time.hhmm())
}

/// Full English name of a weekday.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// An absolute instant measured in minutes since Monday 00:00 of week zero.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use flight_router::domain::WeekTime;
///
/// let t = WeekTime::new(2 * 10080 + 1440 + 615);
/// assert_eq!(t.week(), 2);
/// assert_eq!(t.weekday(), Weekday::Tue);
/// assert_eq!(t.to_string(), "Tuesday 10:15 (week 2)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct WeekTime(i64);

impl WeekTime {
    /// Wrap an absolute minute count.
    pub fn new(minutes: i64) -> Self {
        Self(minutes)
    }

    /// Returns the raw minute count.
    pub fn minutes(&self) -> i64 {
        self.0
    }

    /// Which week this instant falls in (week zero contains minutes 0..10080).
    pub fn week(&self) -> i64 {
        self.0.div_euclid(MINUTES_PER_WEEK)
    }

    /// Offset of this instant inside its week.
    pub fn offset_in_week(&self) -> i64 {
        self.0.rem_euclid(MINUTES_PER_WEEK)
    }

    /// Returns the day of the week.
    pub fn weekday(&self) -> Weekday {
        match self.offset_in_week() / MINUTES_PER_DAY {
            0 => Weekday::Mon,
            1 => Weekday::Tue,
            2 => Weekday::Wed,
            3 => Weekday::Thu,
            4 => Weekday::Fri,
            5 => Weekday::Sat,
            _ => Weekday::Sun,
        }
    }

    /// Minutes after midnight on this instant's day.
    pub fn minute_of_day(&self) -> i64 {
        self.offset_in_week() % MINUTES_PER_DAY
    }

    /// Formats the time of day as "HH:MM".
    pub fn hhmm(&self) -> String {
        let m = self.minute_of_day();
        format!("{:02}:{:02}", m / 60, m % 60)
    }

    /// Returns the duration until a later instant (negative if `other` is earlier).
    pub fn until(&self, other: WeekTime) -> Duration {
        Duration::minutes(other.0 - self.0)
    }
}

impl fmt::Display for WeekTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", day_name(self.weekday()), self.hhmm())?;
        if self.week() != 0 {
            write!(f, " (week {})", self.week())?;
        }
        Ok(())
    }
}
