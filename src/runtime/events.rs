//! Runtime event stream payloads.

use crate::types::EventCode;

/// Events emitted from the single-writer runtime loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    /// A new event was registered.
    EventAdded {
        /// Code of the added event.
        code: EventCode,
    },
    /// A ticket was issued.
    TicketIssued {
        /// Event the ticket belongs to.
        event_code: EventCode,
        /// Booked seat.
        seat: String,
    },
    /// A single ticket was cancelled.
    TicketRemoved {
        /// Event the ticket belonged to.
        event_code: EventCode,
        /// Released seat.
        seat: String,
    },
    /// An event was removed together with its tickets.
    EventRemoved {
        /// Code of the removed event.
        code: EventCode,
        /// Number of tickets deleted with it.
        tickets_removed: usize,
    },
}
