//! Schedule file loading.
//!
//! Reads a comma-separated flight table:
//!
//! ```text
//! Starting_Airport,Destination_Airport,travel_duration_minutes,departure_time,arrival_time,day_of_flight
//! SUB,CGK,90,08:00,09:30,Monday
//! ```
//!
//! The first line is a header. The arrival time column is ignored; arrival
//! is computed from the duration so it stays consistent across midnight.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use super::{ScheduleError, ScheduleGraph};

const MIN_COLUMNS: usize = 6;

/// Errors from loading a schedule file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Reading the file failed
    #[error("failed to read schedule: {0}")]
    Io(#[from] std::io::Error),

    /// A row had too few columns or an unparseable duration
    #[error("line {line}: {message}")]
    Malformed { line: usize, message: String },

    /// A row described an invalid flight
    #[error("line {line}: {source}")]
    Flight {
        line: usize,
        #[source]
        source: ScheduleError,
    },
}

/// Load every row of a schedule table into `schedule`.
///
/// Returns the number of flights added. Blank lines are skipped. Loading
/// stops at the first bad row; flights from earlier rows stay in the
/// schedule.
pub fn load_csv<R: BufRead>(reader: R, schedule: &mut ScheduleGraph) -> Result<usize, LoadError> {
    let mut loaded = 0;

    // Line numbers are 1-based; line 1 is the header.
    for (idx, line) in reader.lines().enumerate().skip(1) {
        let line_no = idx + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let cols: Vec<&str> = line.split(',').map(str::trim).collect();
        if cols.len() < MIN_COLUMNS {
            return Err(LoadError::Malformed {
                line: line_no,
                message: format!("expected {MIN_COLUMNS} columns, found {}", cols.len()),
            });
        }

        let duration: i64 = cols[2].parse().map_err(|_| LoadError::Malformed {
            line: line_no,
            message: format!("invalid duration {:?}", cols[2]),
        })?;

        schedule
            .add_flight_from_csv(cols[0], cols[1], cols[5], cols[3], duration)
            .map_err(|source| LoadError::Flight {
                line: line_no,
                source,
            })?;
        loaded += 1;
    }

    debug!(flights = loaded, "schedule loaded");
    Ok(loaded)
}

/// Open `path` and load it with [`load_csv`].
pub fn load_file(path: impl AsRef<Path>, schedule: &mut ScheduleGraph) -> Result<usize, LoadError> {
    let file = File::open(path)?;
    load_csv(BufReader::new(file), schedule)
}
