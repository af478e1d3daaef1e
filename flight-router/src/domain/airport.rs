//! Airport code types.

use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code {code:?}: {reason}")]
pub struct InvalidAirport {
    code: String,
    reason: &'static str,
}

/// A valid 3-letter IATA airport code.
///
/// Codes are always stored as 3 uppercase ASCII letters. Input is trimmed
/// and case-folded, so schedule files may use any case.
///
/// # Examples
///
/// ```
/// use flight_router::domain::Airport;
///
/// let cgk = Airport::parse("CGK").unwrap();
/// assert_eq!(cgk.as_str(), "CGK");
///
/// // Case is normalised
/// assert_eq!(Airport::parse("cgk").unwrap(), cgk);
///
/// // Wrong length is rejected
/// assert!(Airport::parse("CG").is_err());
/// assert!(Airport::parse("WIII").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Airport([u8; 3]);

impl Airport {
    /// Parse an airport code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidAirport> {
        let trimmed = s.trim();
        let bytes = trimmed.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidAirport {
                code: s.to_string(),
                reason: "must be exactly 3 characters",
            });
        }

        if !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(InvalidAirport {
                code: s.to_string(),
                reason: "must be ASCII letters A-Z",
            });
        }

        Ok(Airport([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_uppercase(),
            bytes[2].to_ascii_uppercase(),
        ]))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl fmt::Debug for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Airport({})", self.as_str())
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Airport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
