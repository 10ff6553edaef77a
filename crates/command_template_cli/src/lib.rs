//! command-template CLI library exports for integration testing.
//!
//! This module exposes the subcommand implementations so integration
//! tests can drive them without spawning the binary.

pub mod commands;
pub mod errors;
pub mod params;
