//! Command-line interface for the `signup` binary.

mod commands;
pub mod handlers;

pub use commands::{Cli, Commands};
