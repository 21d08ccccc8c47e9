//! Core domain logic for cc-flavors.
//!
//! This crate contains the fundamental types and logic for:
//! - Tokenizing: splitting raw input lines into flavor texts
//! - Aggregation: counting flavor texts and ordering them for display
//! - Rendering: drawing aggregate counts as a fixed-width box table

mod aggregate;
mod event;
mod table;
mod tokenize;
mod types;

pub use aggregate::{AggregateRow, aggregate};
pub use event::FlavorEvent;
pub use table::{EMPTY_SUMMARY, TABLE_TITLE, render_summary, render_table};
pub use tokenize::{MARKER, tokenize};
pub use types::{FlavorText, ValidationError};
