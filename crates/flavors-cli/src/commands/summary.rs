//! Summary command for showing flavor text counts.
//!
//! This module implements `cc-flavors summary` (also the default command) with an
//! optional `--since` bound and two output formats (box table, JSON).

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use flavors_core::{aggregate, render_summary};
use flavors_db::Database;

/// Output format for the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Table,
    Json,
}

/// Runs the summary command, writing the result to `writer`.
pub fn run<W: Write>(
    writer: &mut W,
    db: &Database,
    since: Option<DateTime<Utc>>,
    format: Format,
) -> Result<()> {
    let events = db.list_events(since)?;
    let rows = aggregate(&events);
    tracing::debug!(events = events.len(), rows = rows.len(), "aggregated flavor events");

    match format {
        Format::Table => write!(writer, "{}", render_summary(&rows))?,
        Format::Json => writeln!(writer, "{}", serde_json::to_string_pretty(&rows)?)?,
    }
    Ok(())
}
