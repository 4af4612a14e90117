//! Command-line interface
//!
//! Argument parsing and output formatting.

pub mod args;
pub mod output;
