//! Subcommand implementations for the command-template CLI.

pub mod list_cmd;
pub mod resolve_cmd;
pub mod show_cmd;
pub mod validate_cmd;
