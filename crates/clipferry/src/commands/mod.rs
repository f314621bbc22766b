//! Subcommand implementations.

pub mod copy;
pub mod history;
pub mod paste;
pub mod watch;
