//! Record formatting for the console.

use std::io::Write;

use crate::{
    config::OutputFormat,
    record::{EventData, TicketData},
};

use super::ConsoleError;

const RULE: &str = "----------------------------------------";

/// Writes one event in `format`.
pub fn write_event<W: Write>(out: &mut W, event: &EventData, format: OutputFormat) -> Result<(), ConsoleError> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{RULE}")?;
            writeln!(out, "  Event Code: {}", event.code)?;
            writeln!(out, "  Title: {}", event.title)?;
            writeln!(out, "  Date: {}", event.date)?;
            writeln!(out, "  Time: {}", event.time)?;
            writeln!(out, "{RULE}")?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, event)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Writes one ticket in `format`.
pub fn write_ticket<W: Write>(out: &mut W, ticket: &TicketData, format: OutputFormat) -> Result<(), ConsoleError> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{RULE}")?;
            writeln!(out, "  Event (Code): {}", ticket.event_code)?;
            writeln!(out, "  Seat: {}", ticket.seat)?;
            writeln!(out, "  First Name: {}", ticket.first_name)?;
            writeln!(out, "  Last Name: {}", ticket.last_name)?;
            writeln!(out, "  Tax ID: {}", ticket.tax_id)?;
            writeln!(out, "{RULE}")?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, ticket)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
