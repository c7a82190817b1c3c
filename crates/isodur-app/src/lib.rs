//! The `isodur` command-line tool.

pub mod cli;
pub mod commands;
