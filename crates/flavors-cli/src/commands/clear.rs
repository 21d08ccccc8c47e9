//! Clear command for deleting all recorded flavor texts.
//!
//! The decision to clear is made before the store is touched: either `--yes`
//! was given or the user answered the prompt. [`run`] only acts on that decision
//! and opens the store only when it is positive.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use flavors_db::Database;

const PROMPT: &str = "Delete all recorded flavor texts? [y/N] ";

/// Asks for confirmation on `prompt_writer` and reads the answer from `reader`.
///
/// Only `y` or `yes` (any case) confirms. End of input declines.
pub fn confirm<R: BufRead, W: Write>(mut reader: R, prompt_writer: &mut W) -> Result<bool> {
    write!(prompt_writer, "{PROMPT}")?;
    prompt_writer.flush()?;

    let mut answer = String::new();
    reader
        .read_line(&mut answer)
        .context("failed to read confirmation")?;
    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

/// Clears the store if `confirmed`, reporting the outcome on `writer`.
///
/// The store is only opened, through `open`, once the clear is confirmed, so
/// declining never creates or touches a database. Returns the number of
/// events deleted.
pub fn run<W, F>(writer: &mut W, confirmed: bool, open: F) -> Result<usize>
where
    W: Write,
    F: FnOnce() -> Result<Database>,
{
    if !confirmed {
        writeln!(writer, "Aborted.")?;
        return Ok(0);
    }
    let mut db = open()?;
    let deleted = db.clear_events()?;
    writeln!(writer, "Cleared {deleted} flavor events.")?;
    Ok(deleted)
}
