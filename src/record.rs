//! Event and ticket payloads and the keyed record stored in the index.

use serde::{Deserialize, Serialize};

use crate::types::{EventCode, RecordKind, Seat, event_key, ticket_key};

/// A scheduled event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventData {
    /// Unique event code.
    pub code: EventCode,
    /// Display title.
    pub title: String,
    /// Date as `DD/MM/YYYY`.
    pub date: String,
    /// Start time as `HH:MM`.
    pub time: String,
}

/// A seat booked for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketData {
    /// Seat identifier as entered, e.g. `c149`.
    pub seat: String,
    /// Spectator's tax id.
    pub tax_id: String,
    /// Spectator's first name.
    pub first_name: String,
    /// Spectator's last name.
    pub last_name: String,
    /// Code of the event this ticket belongs to.
    pub event_code: EventCode,
}

/// Insert payload used to issue a ticket against an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDraft {
    /// Validated seat.
    pub seat: Seat,
    /// Spectator's tax id.
    pub tax_id: String,
    /// Spectator's first name.
    pub first_name: String,
    /// Spectator's last name.
    pub last_name: String,
}

impl TicketDraft {
    /// Binds the draft to `event_code`.
    pub fn into_ticket(self, event_code: EventCode) -> TicketData {
        TicketData {
            seat: self.seat.into_string(),
            tax_id: self.tax_id,
            first_name: self.first_name,
            last_name: self.last_name,
            event_code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Payload {
    Event(EventData),
    Ticket(TicketData),
}

/// One keyed entry of the index.
///
/// The key is always derived from the payload, so the two cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    key: String,
    payload: Payload,
}

impl Record {
    /// Wraps an event under its `E_<code>` key.
    pub fn event(data: EventData) -> Self {
        Self {
            key: event_key(data.code),
            payload: Payload::Event(data),
        }
    }

    /// Wraps a ticket under its `T_<code>_<seat>` key.
    pub fn ticket(data: TicketData) -> Self {
        Self {
            key: ticket_key(data.event_code, &data.seat),
            payload: Payload::Ticket(data),
        }
    }

    /// Index key.
    pub fn key(&self) -> &str {
        &self.key
    }


    /// Payload discriminant.
    pub fn kind(&self) -> RecordKind {
        match self.payload {
            Payload::Event(_) => RecordKind::Event,
            Payload::Ticket(_) => RecordKind::Ticket,
        }
    }

    /// Event body, if this is an event record.
    pub fn as_event(&self) -> Option<&EventData> {
        match &self.payload {
            Payload::Event(event) => Some(event),
            Payload::Ticket(_) => None,
        }
    }

    /// Ticket body, if this is a ticket record.
    pub fn as_ticket(&self) -> Option<&TicketData> {
        match &self.payload {
            Payload::Ticket(ticket) => Some(ticket),
            Payload::Event(_) => None,
        }
    }

    /// Code of the event this record is or belongs to.
    pub fn event_code(&self) -> EventCode {
        match &self.payload {
            Payload::Event(event) => event.code,
            Payload::Ticket(ticket) => ticket.event_code,
        }
    }

    /// Consumes the record, returning the event body if it is one.
    pub fn into_event(self) -> Option<EventData> {
        match self.payload {
            Payload::Event(event) => Some(event),
            Payload::Ticket(_) => None,
        }
    }

    /// Consumes the record, returning the ticket body if it is one.
    pub fn into_ticket(self) -> Option<TicketData> {
        match self.payload {
            Payload::Ticket(ticket) => Some(ticket),
            Payload::Event(_) => None,
        }
    }
}
