use thiserror::Error;
use tracing::{debug, info};

use crate::{
    record::{EventData, Record, TicketData, TicketDraft},
    types::{EventCode, RecordKind, event_key, ticket_key},
};

use super::tree::{RecordFilter, RecordTree};

/// Precondition failures of catalog operations. The index is unchanged
/// whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// An event with this code already exists.
    #[error("an event with code {0} already exists")]
    DuplicateKey(EventCode),
    /// No event exists with this code.
    #[error("no event exists with code {0}")]
    UnknownEvent(EventCode),
    /// The seat is already booked for this event.
    #[error("seat {seat} is already booked for event {event_code}")]
    SeatTaken {
        /// Event the seat belongs to.
        event_code: EventCode,
        /// Booked seat.
        seat: String,
    },
    /// No ticket is booked for this seat.
    #[error("no booking found for seat {seat} in event {event_code}")]
    UnknownTicket {
        /// Event the seat belongs to.
        event_code: EventCode,
        /// Requested seat.
        seat: String,
    },
}

/// Event removed by [`Catalog::remove_event`] together with its tickets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedEvent {
    /// The removed event.
    pub event: EventData,
    /// Tickets deleted before the event, in key order.
    pub tickets: Vec<TicketData>,
}

/// Event and ticket lifecycle operations over a single [`RecordTree`].
#[derive(Debug, Default)]
pub struct Catalog {
    tree: RecordTree,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new event; fails with [`CatalogError::DuplicateKey`] if the
    /// code is taken.
    pub fn add_event(&mut self, event: EventData) -> Result<(), CatalogError> {
        let code = event.code;
        if self.tree.contains(&event_key(code)) {
            debug!(code, "rejected duplicate event");
            return Err(CatalogError::DuplicateKey(code));
        }

        self.tree.insert(Record::event(event));
        debug!(code, "event added");
        Ok(())
    }

    /// Issues a ticket for an existing event.
    ///
    /// Fails with [`CatalogError::UnknownEvent`] when the event is missing and
    /// [`CatalogError::SeatTaken`] when the seat is already booked.
    pub fn add_ticket(&mut self, event_code: EventCode, draft: TicketDraft) -> Result<(), CatalogError> {
        if !self.tree.contains(&event_key(event_code)) {
            debug!(event_code, "rejected ticket for unknown event");
            return Err(CatalogError::UnknownEvent(event_code));
        }

        let key = ticket_key(event_code, draft.seat.as_str());
        if self.tree.contains(&key) {
            debug!(event_code, seat = %draft.seat, "rejected booked seat");
            return Err(CatalogError::SeatTaken {
                event_code,
                seat: draft.seat.into_string(),
            });
        }

        let ticket = draft.into_ticket(event_code);
        debug!(event_code, seat = %ticket.seat, "ticket issued");
        self.tree.insert(Record::ticket(ticket));
        Ok(())
    }

    /// Looks up an event by code.
    pub fn find_event(&self, code: EventCode) -> Option<&EventData> {
        self.tree.search(&event_key(code)).and_then(Record::as_event)
    }

    /// Looks up the ticket booked for `seat` in an event.
    pub fn find_ticket(&self, event_code: EventCode, seat: &str) -> Option<&TicketData> {
        self.tree
            .search(&ticket_key(event_code, seat))
            .and_then(Record::as_ticket)
    }

    /// Removes an event and every ticket booked for it.
    ///
    /// Ticket keys are collected in full before the first deletion, since
    /// deleting reshapes the subtrees a traversal would still be walking.
    pub fn remove_event(&mut self, code: EventCode) -> Result<RemovedEvent, CatalogError> {
        let key = event_key(code);
        if !self.tree.contains(&key) {
            debug!(code, "rejected removal of unknown event");
            return Err(CatalogError::UnknownEvent(code));
        }

        let ticket_keys = self.tree.collect_ticket_keys(code);
        let tickets: Vec<TicketData> = ticket_keys
            .iter()
            .filter_map(|k| self.tree.delete(k))
            .filter_map(Record::into_ticket)
            .collect();

        let event = self
            .tree
            .delete(&key)
            .and_then(Record::into_event)
            .ok_or(CatalogError::UnknownEvent(code))?;

        info!(code, tickets = tickets.len(), "event removed with its tickets");
        Ok(RemovedEvent { event, tickets })
    }

    /// Cancels a single booking.
    pub fn remove_ticket(&mut self, event_code: EventCode, seat: &str) -> Result<TicketData, CatalogError> {
        let removed = self
            .tree
            .delete(&ticket_key(event_code, seat))
            .and_then(Record::into_ticket);

        let Some(ticket) = removed else {
            debug!(event_code, seat, "rejected removal of unknown ticket");
            return Err(CatalogError::UnknownTicket {
                event_code,
                seat: seat.to_string(),
            });
        };

        debug!(event_code, seat, "ticket removed");
        Ok(ticket)
    }

    /// Every event in key order.
    pub fn list_events(&self) -> impl Iterator<Item = &EventData> {
        self.tree
            .enumerate(RecordKind::Event, None)
            .filter_map(Record::as_event)
    }

    /// Tickets of one event in key order.
    pub fn list_tickets_for_event(
        &self,
        code: EventCode,
    ) -> Result<impl Iterator<Item = &TicketData>, CatalogError> {
        if !self.tree.contains(&event_key(code)) {
            return Err(CatalogError::UnknownEvent(code));
        }

        let of_event: RecordFilter<'_> = Box::new(move |rec: &Record| rec.event_code() == code);
        Ok(self
            .tree
            .enumerate(RecordKind::Ticket, Some(of_event))
            .filter_map(Record::as_ticket))
    }

    /// Number of events plus tickets.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Number of events.
    pub fn event_count(&self) -> usize {
        self.tree.enumerate(RecordKind::Event, None).count()
    }

    /// Number of tickets across all events.
    pub fn ticket_count(&self) -> usize {
        self.tree.enumerate(RecordKind::Ticket, None).count()
    }

    /// Read-only view of the underlying index.
    pub fn tree(&self) -> &RecordTree {
        &self.tree
    }

    /// Frees every record and returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let freed = self.tree.clear();
        info!(freed, "catalog torn down");
        freed
    }
}
