//! Venue records manager: events and the seat tickets sold against them,
//! held in a single ordered index.
//!
//! # Examples
//!
//! In-memory usage with [`core::catalog::Catalog`]:
//! ```
//! use boxoffice::{
//!     core::catalog::{Catalog, CatalogError},
//!     record::{EventData, TicketDraft},
//!     types::Seat,
//! };
//!
//! let mut catalog = Catalog::new();
//! catalog.add_event(EventData {
//!     code: 101,
//!     title: "Yoga".to_string(),
//!     date: "01/01/2025".to_string(),
//!     time: "10:00".to_string(),
//! }).expect("add event");
//!
//! let draft = TicketDraft {
//!     seat: Seat::parse("c149").expect("seat"),
//!     tax_id: "123456789".to_string(),
//!     first_name: "Ada".to_string(),
//!     last_name: "Lovelace".to_string(),
//! };
//! catalog.add_ticket(101, draft.clone()).expect("issue");
//! assert!(matches!(catalog.add_ticket(101, draft), Err(CatalogError::SeatTaken { .. })));
//!
//! let removed = catalog.remove_event(101).expect("remove");
//! assert_eq!(removed.tickets.len(), 1);
//! assert!(catalog.is_empty());
//! ```
//!
//! Runtime usage behind a single writer:
//! ```no_run
//! use boxoffice::{
//!     core::catalog::Catalog,
//!     record::EventData,
//!     runtime::handle::{spawn_catalog, RuntimeConfig},
//! };
//!
//! # #[tokio::main]
//! # async fn main() {
//! let handle = spawn_catalog(Catalog::new(), RuntimeConfig::default());
//! handle.add_event(EventData {
//!     code: 7,
//!     title: "Spin".to_string(),
//!     date: "02/02/2025".to_string(),
//!     time: "18:30".to_string(),
//! }).await.expect("add event");
//! handle.shutdown().await.expect("shutdown");
//! # }
//! ```
#![warn(missing_docs)]

/// Environment and command-line configuration.
pub mod config;
/// Text menus over a catalog.
pub mod console;
/// Ordered record index and catalog operations.
pub mod core;
/// Event and ticket records.
pub mod record;
/// Single-writer runtime handle and events.
pub mod runtime;
/// Shared primitive types, seats, and key encoding.
pub mod types;
