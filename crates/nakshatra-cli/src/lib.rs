//! Political Nakshatra CLI library.
//!
//! This library provides the core functionality for the `nakshatra` command-line
//! interface, including configuration management, command execution, message
//! resolution and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod messages;
pub mod output;
pub mod report;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use messages::Messages;
pub use output::Formatter;
