//! Subcommand implementations.

pub mod export;
pub mod locations;
pub mod overview;
