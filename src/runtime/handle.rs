use thiserror::Error;
use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, info};

use crate::{
    core::catalog::{Catalog, CatalogError, RemovedEvent},
    record::{EventData, TicketData, TicketDraft},
    types::EventCode,
};

use super::events::CatalogEvent;

/// Failures surfaced by [`CatalogHandle`] calls.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The catalog rejected the command.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// The runtime loop has stopped.
    #[error("catalog runtime is no longer running")]
    ChannelClosed,
}

/// Channel sizing for [`spawn_catalog`].
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Commands that may queue before senders wait.
    pub command_queue_bound: usize,
    /// Events retained for slow subscribers before they lag.
    pub event_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            command_queue_bound: 256,
            event_capacity: 1024,
        }
    }
}

/// Cloneable front end of the catalog runtime.
///
/// All commands are applied by one task in arrival order, so an event
/// removal and its ticket cascade are never interleaved with other writes.
#[derive(Clone)]
pub struct CatalogHandle {
    cmd_tx: mpsc::Sender<Command>,
    events_tx: broadcast::Sender<CatalogEvent>,
}

enum Command {
    AddEvent {
        event: EventData,
        resp: oneshot::Sender<Result<(), CatalogError>>,
    },
    AddTicket {
        event_code: EventCode,
        draft: TicketDraft,
        resp: oneshot::Sender<Result<(), CatalogError>>,
    },
    FindEvent {
        code: EventCode,
        resp: oneshot::Sender<Option<EventData>>,
    },
    FindTicket {
        event_code: EventCode,
        seat: String,
        resp: oneshot::Sender<Option<TicketData>>,
    },
    RemoveEvent {
        code: EventCode,
        resp: oneshot::Sender<Result<RemovedEvent, CatalogError>>,
    },
    RemoveTicket {
        event_code: EventCode,
        seat: String,
        resp: oneshot::Sender<Result<TicketData, CatalogError>>,
    },
    ListEvents {
        resp: oneshot::Sender<Vec<EventData>>,
    },
    ListTickets {
        code: EventCode,
        resp: oneshot::Sender<Result<Vec<TicketData>, CatalogError>>,
    },
    Len {
        resp: oneshot::Sender<usize>,
    },
    Shutdown {
        resp: oneshot::Sender<usize>,
    },
}

/// Moves `catalog` into a background task and returns its handle.
///
/// Must be called from within a tokio runtime.
pub fn spawn_catalog(catalog: Catalog, config: RuntimeConfig) -> CatalogHandle {
    let (cmd_tx, mut cmd_rx) = mpsc::channel::<Command>(config.command_queue_bound.max(1));
    let (events_tx, _) = broadcast::channel::<CatalogEvent>(config.event_capacity.max(1));

    let events_tx_loop = events_tx.clone();
    tokio::spawn(async move {
        let mut catalog = catalog;
        info!(records = catalog.len(), "catalog runtime started");

        while let Some(cmd) = cmd_rx.recv().await {
            if handle_command(cmd, &mut catalog, &events_tx_loop) {
                break;
            }
        }

        // Non-zero only when every handle was dropped without a shutdown.
        let freed = catalog.clear();
        info!(freed, "catalog runtime stopped");
    });

    CatalogHandle { cmd_tx, events_tx }
}

impl CatalogHandle {
    /// Subscribes to mutation events published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<CatalogEvent> {
        self.events_tx.subscribe()
    }

    /// See [`Catalog::add_event`].
    pub async fn add_event(&self, event: EventData) -> Result<(), RuntimeError> {
        self.request(|resp| Command::AddEvent { event, resp }).await??;
        Ok(())
    }

    /// See [`Catalog::add_ticket`].
    pub async fn add_ticket(&self, event_code: EventCode, draft: TicketDraft) -> Result<(), RuntimeError> {
        self.request(|resp| Command::AddTicket {
            event_code,
            draft,
            resp,
        })
        .await??;
        Ok(())
    }

    /// See [`Catalog::find_event`].
    pub async fn find_event(&self, code: EventCode) -> Result<Option<EventData>, RuntimeError> {
        self.request(|resp| Command::FindEvent { code, resp }).await
    }

    /// See [`Catalog::find_ticket`].
    pub async fn find_ticket(
        &self,
        event_code: EventCode,
        seat: impl Into<String>,
    ) -> Result<Option<TicketData>, RuntimeError> {
        let seat = seat.into();
        self.request(|resp| Command::FindTicket {
            event_code,
            seat,
            resp,
        })
        .await
    }

    /// See [`Catalog::remove_event`]. The cascade runs as one command.
    pub async fn remove_event(&self, code: EventCode) -> Result<RemovedEvent, RuntimeError> {
        Ok(self.request(|resp| Command::RemoveEvent { code, resp }).await??)
    }

    /// See [`Catalog::remove_ticket`].
    pub async fn remove_ticket(
        &self,
        event_code: EventCode,
        seat: impl Into<String>,
    ) -> Result<TicketData, RuntimeError> {
        let seat = seat.into();
        Ok(self
            .request(|resp| Command::RemoveTicket {
                event_code,
                seat,
                resp,
            })
            .await??)
    }

    /// Snapshot of every event in key order.
    pub async fn list_events(&self) -> Result<Vec<EventData>, RuntimeError> {
        self.request(|resp| Command::ListEvents { resp }).await
    }

    /// Snapshot of one event's tickets in key order.
    pub async fn list_tickets_for_event(&self, code: EventCode) -> Result<Vec<TicketData>, RuntimeError> {
        Ok(self.request(|resp| Command::ListTickets { code, resp }).await??)
    }

    /// Number of stored records.
    pub async fn len(&self) -> Result<usize, RuntimeError> {
        self.request(|resp| Command::Len { resp }).await
    }

    /// Stops the runtime, freeing the catalog. Returns how many records were
    /// dropped.
    pub async fn shutdown(&self) -> Result<usize, RuntimeError> {
        self.request(|resp| Command::Shutdown { resp }).await
    }

    async fn request<T>(&self, make: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(make(tx))
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }
}

fn handle_command(cmd: Command, catalog: &mut Catalog, events_tx: &broadcast::Sender<CatalogEvent>) -> bool {
    match cmd {
        Command::AddEvent { event, resp } => {
            let code = event.code;
            let res = catalog.add_event(event);
            if res.is_ok() {
                let _ = events_tx.send(CatalogEvent::EventAdded { code });
            }
            let _ = resp.send(res);
        }
        Command::AddTicket {
            event_code,
            draft,
            resp,
        } => {
            let seat = draft.seat.to_string();
            let res = catalog.add_ticket(event_code, draft);
            if res.is_ok() {
                let _ = events_tx.send(CatalogEvent::TicketIssued { event_code, seat });
            }
            let _ = resp.send(res);
        }
        Command::FindEvent { code, resp } => {
            let _ = resp.send(catalog.find_event(code).cloned());
        }
        Command::FindTicket {
            event_code,
            seat,
            resp,
        } => {
            let _ = resp.send(catalog.find_ticket(event_code, &seat).cloned());
        }
        Command::RemoveEvent { code, resp } => {
            let res = catalog.remove_event(code);
            if let Ok(removed) = &res {
                let _ = events_tx.send(CatalogEvent::EventRemoved {
                    code,
                    tickets_removed: removed.tickets.len(),
                });
            }
            let _ = resp.send(res);
        }
        Command::RemoveTicket {
            event_code,
            seat,
            resp,
        } => {
            let res = catalog.remove_ticket(event_code, &seat);
            if res.is_ok() {
                let _ = events_tx.send(CatalogEvent::TicketRemoved { event_code, seat });
            }
            let _ = resp.send(res);
        }
        Command::ListEvents { resp } => {
            let _ = resp.send(catalog.list_events().cloned().collect());
        }
        Command::ListTickets { code, resp } => {
            let res = catalog
                .list_tickets_for_event(code)
                .map(|tickets| tickets.cloned().collect());
            let _ = resp.send(res);
        }
        Command::Len { resp } => {
            let _ = resp.send(catalog.len());
        }
        Command::Shutdown { resp } => {
            let freed = catalog.clear();
            debug!(freed, "shutdown requested");
            let _ = resp.send(freed);
            return true;
        }
    }

    false
}
