//! Command-line interface
//!
//! This module contains the CLI options, argument parsing and
//! command dispatch for the `bip39` binary.

pub mod commands;

pub use commands::{run_command, Command, Opt};
