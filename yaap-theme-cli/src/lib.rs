//! yaap-theme CLI library

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod observability;
pub mod reporter;

pub use commands::{CreateCommand, CreateOutcome};
pub use reporter::TerminalReporter;
