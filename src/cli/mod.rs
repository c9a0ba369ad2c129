//! CLI module for stampcard - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for enrolling customers,
//! logging visits, redeeming rewards and viewing statistics.

pub mod commands;

pub use commands::Cli;
