//! hubnet CLI library.
//!
//! This crate provides the subcommand handlers and output formatting used by
//! the `hubnet-cli` binary.

pub mod commands;
pub mod output;
