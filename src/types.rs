//! Shared primitive ids, record kinds, seats, and key encoding.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Event code; unique across all events.
pub type EventCode = u32;

/// Prefix of every event key.
pub const EVENT_KEY_PREFIX: &str = "E_";
/// Prefix of every ticket key.
pub const TICKET_KEY_PREFIX: &str = "T_";

/// Lowest seat number in any section.
pub const SEAT_NUMBER_MIN: u16 = 1;
/// Highest seat number in any section.
pub const SEAT_NUMBER_MAX: u16 = 500;

/// Discriminant of the payload stored in a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    /// Event payload.
    Event,
    /// Ticket payload.
    Ticket,
}

/// Builds the index key of an event.
pub fn event_key(code: EventCode) -> String {
    format!("{EVENT_KEY_PREFIX}{code}")
}

/// Builds the index key of a ticket.
pub fn ticket_key(event_code: EventCode, seat: &str) -> String {
    format!("{TICKET_KEY_PREFIX}{event_code}_{seat}")
}

/// Why a seat string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatFormatError {
    /// Seat text is not 2 to 4 characters long.
    #[error("seat must be 2 to 4 characters, got {0}")]
    Length(usize),
    /// Section letter outside `a`..=`h`.
    #[error("section must be a letter between 'a' and 'h', got {0:?}")]
    Section(char),
    /// Seat number missing, not numeric, or outside 1..=500.
    #[error("seat number must be between 1 and 500, got {0:?}")]
    Number(String),
}

/// Validated seat identifier such as `c149`.
///
/// The text is kept exactly as entered; only its shape is checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seat(String);

impl Seat {
    /// Validates `raw` against the seat format.
    pub fn parse(raw: &str) -> Result<Self, SeatFormatError> {
        let len = raw.chars().count();
        if !(2..=4).contains(&len) {
            return Err(SeatFormatError::Length(len));
        }

        let mut chars = raw.chars();
        let section = chars.next().unwrap_or_default();
        if !('a'..='h').contains(&section.to_ascii_lowercase()) {
            return Err(SeatFormatError::Section(section));
        }

        let digits = chars.as_str();
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SeatFormatError::Number(digits.to_string()));
        }
        match digits.parse::<u16>() {
            Ok(n) if (SEAT_NUMBER_MIN..=SEAT_NUMBER_MAX).contains(&n) => Ok(Self(raw.to_string())),
            _ => Err(SeatFormatError::Number(digits.to_string())),
        }
    }

    /// Seat text as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the seat, returning its text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Seat {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
