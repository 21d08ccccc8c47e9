//! cc-flavors CLI library.
//!
//! This crate provides the CLI interface for recording and summarizing flavor texts.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
