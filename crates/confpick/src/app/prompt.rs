//! Console dialogue for choosing a candidate by number.

use std::io::{BufRead, Write};

use crate::domain::errors::{InputError, SelectionError};
use crate::domain::model::Entry;

pub const NO_CANDIDATES: &str = "No Config files found";
pub const MENU_HEADER: &str = "Choose a number:";

/// Write the menu header followed by one `<index> <path>` line per entry.
pub fn render_menu<W: Write>(entries: &[Entry], writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "{MENU_HEADER}")?;
    for entry in entries {
        writeln!(writer, "{entry}")?;
    }
    writer.flush()
}

/// Interpret one line of operator input as an index into `count` candidates.
pub fn parse_choice(line: &str, count: usize) -> Result<usize, InputError> {
    let value: i32 = line.trim().parse().map_err(|_| InputError::InvalidNumber)?;
    usize::try_from(value)
        .ok()
        .filter(|index| *index < count)
        .ok_or(InputError::OutOfRange { value, count })
}

/// Owns the console handles for the duration of one selection.
#[derive(Debug)]
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Read lines until one names a valid index, reporting each rejected line.
    ///
    /// Blank lines are skipped without a message. End of input is fatal.
    pub fn read_choice(&mut self, count: usize) -> Result<usize, SelectionError> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                return Err(SelectionError::InputStreamExhausted);
            }

            let parsed = match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => parse_choice(line, count),
                Err(_) => Err(InputError::InvalidNumber),
            };

            match parsed {
                Ok(index) => return Ok(index),
                Err(err) => {
                    tracing::debug!(
                        input = %String::from_utf8_lossy(&buf).trim(),
                        reason = ?err,
                        "rejected choice"
                    );
                    writeln!(self.writer, "{err}")?;
                    self.writer.flush()?;
                }
            }
        }
    }

    /// Release the console handles.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}
