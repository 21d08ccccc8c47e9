//! CLI subcommand implementations.

pub mod clear;
pub mod ingest;
pub mod summary;
pub mod util;
