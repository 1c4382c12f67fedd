//! Line reading and parsing helpers for the menu prompts.

use std::io::BufRead;

use crate::types::EventCode;

/// Reads one line without its terminator. `None` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    let trimmed = buf.trim_end_matches(['\n', '\r']).len();
    buf.truncate(trimmed);
    Ok(Some(buf))
}

/// Parses a menu selection; anything unparsable is `None`.
pub fn parse_choice(line: &str) -> Option<u32> {
    line.trim().parse().ok()
}

/// Parses a non-negative event code.
pub fn parse_code(line: &str) -> Option<EventCode> {
    line.trim().parse().ok()
}
