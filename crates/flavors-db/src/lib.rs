//! Storage layer for cc-flavors.
//!
//! Provides an append-only log of flavor events using `rusqlite`.
//!
//! # Thread Safety
//!
//! The [`Database`] type wraps a `rusqlite::Connection`, which is `Send` but not `Sync`.
//! One invocation of the CLI owns one `Database` for its whole lifetime; concurrent
//! writers against the same file are not supported.
//!
//! # Durability
//!
//! Every write runs in autocommit mode or its own transaction with
//! `synchronous = FULL`, so a successful return means the change is on disk.
//!
//! # Schema
//!
//! ## Timestamp Format
//!
//! Timestamps are stored as TEXT in RFC 3339 format with nanosecond precision and a
//! `Z` suffix (e.g., `2024-01-15T10:30:00.000000000Z`). The fixed width ensures
//! lexicographic ordering matches chronological ordering, so time filters are plain
//! string comparisons.

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use flavors_core::{FlavorEvent, FlavorText};
use rusqlite::{Connection, params};
use thiserror::Error;

/// Database errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// An error from the underlying database.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// Failed to parse a stored event timestamp.
    #[error("invalid timestamp for event {event_id}: {timestamp}")]
    TimestampParse {
        event_id: i64,
        timestamp: String,
        #[source]
        source: chrono::ParseError,
    },
    /// A stored event failed validation.
    #[error("invalid event data for {event_id}: {message}")]
    InvalidEventData { event_id: i64, message: String },
}

/// Database connection wrapper.
///
/// See the [module documentation](self) for thread safety considerations.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens a database at the given path, creating it if necessary.
    ///
    /// The database schema is automatically initialized on first open.
    pub fn open(path: &Path) -> Result<Self, DbError> {
        tracing::debug!(path = %path.display(), "opening event store");
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Opens an in-memory database.
    ///
    /// Useful for testing. The database is destroyed when the connection closes.
    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Initializes the database schema.
    ///
    /// This is idempotent - safe to call on an already-initialized database.
    fn init(&self) -> Result<(), DbError> {
        self.conn.execute_batch("PRAGMA synchronous = FULL;")?;
        self.conn.execute_batch(
            "
            -- Flavor events: one row per phrase occurrence, text is not unique
            -- occurred_at: RFC 3339 UTC with nanoseconds (e.g., '2024-01-15T10:30:00.000000000Z')
            CREATE TABLE IF NOT EXISTS flavor_events (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                text TEXT NOT NULL,
                occurred_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_flavor_events_occurred_at ON flavor_events(occurred_at);
            ",
        )?;
        Ok(())
    }

    /// Appends one event.
    pub fn insert_event(&mut self, event: &FlavorEvent) -> Result<(), DbError> {
        self.conn.execute(
            "INSERT INTO flavor_events (text, occurred_at) VALUES (?, ?)",
            params![event.text.as_str(), format_timestamp(event.occurred_at)],
        )?;
        tracing::debug!(text = %event.text, "inserted flavor event");
        Ok(())
    }

    /// Lists events at or after `since`, or all events when `since` is `None`.
    ///
    /// Rows are ordered by timestamp, then by insertion order.
    pub fn list_events(&self, since: Option<DateTime<Utc>>) -> Result<Vec<FlavorEvent>, DbError> {
        let since = since.map(format_timestamp);
        let mut stmt = self.conn.prepare(
            "
            SELECT id, text, occurred_at
            FROM flavor_events
            WHERE ?1 IS NULL OR occurred_at >= ?1
            ORDER BY occurred_at ASC, id ASC
            ",
        )?;
        let rows = stmt.query_map([since], |row| {
            let id: i64 = row.get(0)?;
            let text: String = row.get(1)?;
            let occurred_at: String = row.get(2)?;
            Ok((id, text, occurred_at))
        })?;

        let mut events = Vec::new();
        for row in rows {
            let (id, text, occurred_at) = row?;
            let text = FlavorText::new(text).map_err(|err| DbError::InvalidEventData {
                event_id: id,
                message: err.to_string(),
            })?;
            let occurred_at = parse_timestamp(&occurred_at, id)?;
            events.push(FlavorEvent::new(text, occurred_at));
        }
        tracing::debug!(count = events.len(), "listed flavor events");
        Ok(events)
    }

    /// Deletes every event, returning how many were removed.
    ///
    /// Runs in a single transaction: the store is either emptied or untouched.
    pub fn clear_events(&mut self) -> Result<usize, DbError> {
        let tx = self.conn.transaction()?;
        let deleted = tx.execute("DELETE FROM flavor_events", [])?;
        tx.commit()?;
        tracing::debug!(deleted, "cleared flavor events");
        Ok(deleted)
    }
}

fn parse_timestamp(timestamp: &str, event_id: i64) -> Result<DateTime<Utc>, DbError> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|source| DbError::TimestampParse {
            event_id,
            timestamp: timestamp.to_string(),
            source,
        })
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true)
}
