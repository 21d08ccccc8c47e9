//! Ingest command for recording flavor texts from stdin.
//!
//! Each input line is tokenized independently and every phrase is written to
//! the store before the next line is read. A storage failure stops ingestion
//! immediately; phrases already written stay recorded.

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use flavors_core::{FlavorEvent, FlavorText, tokenize};
use flavors_db::Database;

/// Reads stdin to the end and records every flavor text found.
pub fn run(db: &mut Database) -> Result<usize> {
    let stdin = io::stdin();
    ingest_lines(db, stdin.lock(), Utc::now)
}

/// Records the flavor texts in `reader`, stamping each with `clock()`.
///
/// Lines are decoded lossily, so invalid UTF-8 never aborts ingestion.
/// Returns the number of events written.
pub fn ingest_lines<R, C>(db: &mut Database, reader: R, mut clock: C) -> Result<usize>
where
    R: BufRead,
    C: FnMut() -> DateTime<Utc>,
{
    let mut recorded = 0;
    for (idx, line) in reader.split(b'\n').enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", idx + 1))?;
        let line = String::from_utf8_lossy(&line);
        for phrase in tokenize(&line) {
            let text = FlavorText::new(phrase)?;
            db.insert_event(&FlavorEvent::new(text, clock()))
                .with_context(|| format!("failed to record flavor text from line {}", idx + 1))?;
            recorded += 1;
        }
    }
    tracing::info!(recorded, "ingested flavor texts");
    Ok(recorded)
}
