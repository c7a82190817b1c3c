//! Shared plumbing for the `isodur` workspace: configuration and core errors.

pub mod config;
pub mod error;
