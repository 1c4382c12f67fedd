//! Text menus driving a [`Catalog`] from line-oriented input.

/// Line reading and parsing helpers.
pub mod input;
/// Record formatting.
pub mod render;

use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::info;

use crate::{
    config::OutputFormat,
    core::catalog::{Catalog, CatalogError},
    record::{EventData, TicketDraft},
    types::Seat,
};

use self::input::{parse_choice, parse_code, read_line};
use self::render::{write_event, write_ticket};

/// I/O failures while running the menus.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading input or writing output failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// JSON rendering failed.
    #[error("json rendering failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Reads one line or leaves the current menu flow on end of input.
macro_rules! line_or_exit {
    ($console:expr) => {
        match $console.read()? {
            Some(line) => line,
            None => return Ok(Flow::Exit),
        }
    };
}

/// Reads an event code; prints "Invalid code." and aborts the flow on bad input.
macro_rules! code_or_return {
    ($console:expr) => {{
        let line = line_or_exit!($console);
        match parse_code(&line) {
            Some(code) => code,
            None => {
                writeln!($console.out, "(!) Invalid code.")?;
                return Ok(Flow::Continue);
            }
        }
    }};
}

/// Menu-driven front end over a catalog.
pub struct Console<R, W> {
    input: R,
    out: W,
    catalog: Catalog,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading commands from `input` and printing to `out`.
    pub fn new(input: R, out: W, catalog: Catalog, format: OutputFormat) -> Self {
        Self {
            input,
            out,
            catalog,
            format,
        }
    }

    /// Catalog state as seen by the menus.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Runs the main menu until Exit is chosen or input ends, then deletes
    /// all data. Returns how many records were freed.
    pub fn run(&mut self) -> Result<usize, ConsoleError> {
        loop {
            writeln!(self.out, "\n--- BOX OFFICE MAIN MENU ---")?;
            writeln!(self.out, "1. Manage Events")?;
            writeln!(self.out, "2. Manage Tickets")?;
            writeln!(self.out, "3. Exit and Delete All Data")?;
            write!(self.out, "Select [1-3]: ")?;
            self.out.flush()?;

            let Some(line) = self.read()? else {
                break;
            };
            let flow = match parse_choice(&line) {
                Some(1) => self.event_menu()?,
                Some(2) => self.ticket_menu()?,
                Some(3) => Flow::Exit,
                _ => {
                    writeln!(self.out, "(!) Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }

        writeln!(self.out, "Deleting all data and terminating the program...")?;
        let freed = self.catalog.clear();
        writeln!(self.out, "Program terminated successfully.")?;
        self.out.flush()?;
        info!(freed, "console session ended");
        Ok(freed)
    }

    fn read(&mut self) -> Result<Option<String>, ConsoleError> {
        Ok(read_line(&mut self.input)?)
    }

    fn prompt(&mut self, text: &str) -> Result<(), ConsoleError> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }

    fn event_menu(&mut self) -> Result<Flow, ConsoleError> {
        loop {
            writeln!(self.out, "\n--- Event Management Menu ---")?;
            writeln!(self.out, "1. Add Event")?;
            writeln!(self.out, "2. Search for Event (by Code)")?;
            writeln!(self.out, "3. Delete Event (by Code)")?;
            writeln!(self.out, "4. Print List of Events")?;
            writeln!(self.out, "5. Return to Main Menu")?;
            self.prompt("Select [1-5]: ")?;

            let line = line_or_exit!(self);
            let flow = match parse_choice(&line) {
                Some(1) => self.add_event()?,
                Some(2) => self.find_event()?,
                Some(3) => self.remove_event()?,
                Some(4) => self.print_events()?,
                Some(5) => return Ok(Flow::Continue),
                _ => {
                    writeln!(self.out, "(!) Invalid choice.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                return Ok(Flow::Exit);
            }
        }
    }

    fn ticket_menu(&mut self) -> Result<Flow, ConsoleError> {
        loop {
            writeln!(self.out, "\n--- Ticket Management Menu ---")?;
            writeln!(self.out, "1. Issue Ticket")?;
            writeln!(self.out, "2. Search for Ticket (by Seat & Event Code)")?;
            writeln!(self.out, "3. Print List of Tickets for an Event")?;
            writeln!(self.out, "4. Return to Main Menu")?;
            writeln!(self.out, "5. Cancel Ticket (by Seat & Event Code)")?;
            self.prompt("Select [1-5]: ")?;

            let line = line_or_exit!(self);
            let flow = match parse_choice(&line) {
                Some(1) => self.add_ticket()?,
                Some(2) => self.find_ticket()?,
                Some(3) => self.print_tickets_for_event()?,
                Some(4) => return Ok(Flow::Continue),
                Some(5) => self.remove_ticket()?,
                _ => {
                    writeln!(self.out, "(!) Invalid choice.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                return Ok(Flow::Exit);
            }
        }
    }

    fn add_event(&mut self) -> Result<Flow, ConsoleError> {
        writeln!(self.out, "\n--- Add New Event ---")?;
        self.prompt("Enter event code (integer): ")?;
        let code = code_or_return!(self);

        if self.catalog.find_event(code).is_some() {
            writeln!(self.out, "(!) Error: An event with this code already exists.")?;
            return Ok(Flow::Continue);
        }

        self.prompt("Enter event title: ")?;
        let title = line_or_exit!(self);
        self.prompt("Enter date (DD/MM/YYYY): ")?;
        let date = line_or_exit!(self);
        self.prompt("Enter time (HH:MM): ")?;
        let time = line_or_exit!(self);

        let event = EventData {
            code,
            title: title.trim().to_string(),
            date: date.trim().to_string(),
            time: time.trim().to_string(),
        };
        let title = event.title.clone();
        match self.catalog.add_event(event) {
            Ok(()) => writeln!(self.out, "-> Event '{title}' added successfully.")?,
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn find_event(&mut self) -> Result<Flow, ConsoleError> {
        writeln!(self.out, "\n--- Search for Event ---")?;
        self.prompt("Enter event code to search for: ")?;
        let code = code_or_return!(self);

        match self.catalog.find_event(code) {
            Some(event) => {
                writeln!(self.out, "-> Event found:")?;
                write_event(&mut self.out, event, self.format)?;
            }
            None => writeln!(self.out, "(!) No event found with code {code}.")?,
        }
        Ok(Flow::Continue)
    }

    fn remove_event(&mut self) -> Result<Flow, ConsoleError> {
        writeln!(self.out, "\n--- Delete Event ---")?;
        self.prompt("Enter event code to delete: ")?;
        let code = code_or_return!(self);

        match self.catalog.remove_event(code) {
            Ok(removed) => {
                writeln!(
                    self.out,
                    "-> Deleted {} tickets associated with the event.",
                    removed.tickets.len()
                )?;
                writeln!(
                    self.out,
                    "-> Event with code {code} and all its tickets have been deleted."
                )?;
            }
            Err(CatalogError::UnknownEvent(_)) => {
                writeln!(self.out, "(!) No event found with code {code}.")?;
            }
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn print_events(&mut self) -> Result<Flow, ConsoleError> {
        writeln!(self.out, "\n--- LIST OF ALL EVENTS ---")?;
        for event in self.catalog.list_events() {
            write_event(&mut self.out, event, self.format)?;
        }
        writeln!(self.out, "--- END OF LIST ---")?;
        Ok(Flow::Continue)
    }

    fn add_ticket(&mut self) -> Result<Flow, ConsoleError> {
        writeln!(self.out, "\n--- Issue Ticket ---")?;
        self.prompt("Enter event code: ")?;
        let event_code = code_or_return!(self);

        if self.catalog.find_event(event_code).is_none() {
            self.report(&CatalogError::UnknownEvent(event_code))?;
            return Ok(Flow::Continue);
        }

        self.prompt("Enter seat (e.g., c149): ")?;
        let raw_seat = line_or_exit!(self);
        let seat = match Seat::parse(raw_seat.trim()) {
            Ok(seat) => seat,
            Err(err) => {
                writeln!(
                    self.out,
                    "(!) Error: Invalid seat. Section 'a'-'h' and number 1-500 ({err})."
                )?;
                return Ok(Flow::Continue);
            }
        };

        if self.catalog.find_ticket(event_code, seat.as_str()).is_some() {
            self.report(&CatalogError::SeatTaken {
                event_code,
                seat: seat.to_string(),
            })?;
            return Ok(Flow::Continue);
        }

        self.prompt("Enter spectator's Tax ID: ")?;
        let tax_id = line_or_exit!(self);
        self.prompt("Enter spectator's first name: ")?;
        let first_name = line_or_exit!(self);
        self.prompt("Enter spectator's last name: ")?;
        let last_name = line_or_exit!(self);

        let draft = TicketDraft {
            seat: seat.clone(),
            tax_id: tax_id.trim().to_string(),
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
        };
        match self.catalog.add_ticket(event_code, draft) {
            Ok(()) => writeln!(self.out, "-> Ticket for seat {seat} issued successfully.")?,
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn find_ticket(&mut self) -> Result<Flow, ConsoleError> {
        writeln!(self.out, "\n--- Search for Ticket ---")?;
        self.prompt("Enter event code: ")?;
        let event_code = code_or_return!(self);
        self.prompt("Enter seat number (e.g., c149): ")?;
        let seat = line_or_exit!(self);
        let seat = seat.trim();

        match self.catalog.find_ticket(event_code, seat) {
            Some(ticket) => {
                writeln!(self.out, "-> Ticket found:")?;
                write_ticket(&mut self.out, ticket, self.format)?;
            }
            None => writeln!(
                self.out,
                "(!) No booking found for seat {seat} in event {event_code}."
            )?,
        }
        Ok(Flow::Continue)
    }

    fn print_tickets_for_event(&mut self) -> Result<Flow, ConsoleError> {
        writeln!(self.out, "\n--- Print Tickets for an Event ---")?;
        self.prompt("Enter event code: ")?;
        let event_code = code_or_return!(self);

        match self.catalog.list_tickets_for_event(event_code) {
            Ok(tickets) => {
                writeln!(self.out, "\n--- LIST OF TICKETS FOR EVENT {event_code} ---")?;
                for ticket in tickets {
                    write_ticket(&mut self.out, ticket, self.format)?;
                }
                writeln!(self.out, "--- END OF LIST ---")?;
            }
            Err(err) => writeln!(self.out, "(!) Error: {err}.")?,
        }
        Ok(Flow::Continue)
    }

    fn remove_ticket(&mut self) -> Result<Flow, ConsoleError> {
        writeln!(self.out, "\n--- Cancel Ticket ---")?;
        self.prompt("Enter event code: ")?;
        let event_code = code_or_return!(self);
        self.prompt("Enter seat number (e.g., c149): ")?;
        let seat = line_or_exit!(self);

        match self.catalog.remove_ticket(event_code, seat.trim()) {
            Ok(ticket) => writeln!(self.out, "-> Ticket for seat {} cancelled.", ticket.seat)?,
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self, err: &CatalogError) -> Result<(), ConsoleError> {
        writeln!(self.out, "(!) Error: {err}.")?;
        Ok(())
    }
}
