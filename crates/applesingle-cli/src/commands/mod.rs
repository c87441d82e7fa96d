//! Subcommand handlers

pub mod analyze;
pub mod create;
pub mod edit;
pub mod extract;
pub mod filter;
pub mod info;
