//! Library side of the `asu` AppleSingle utility
//!
//! Argument definitions and subcommand handlers live here so they can be
//! exercised from tests; `main.rs` only parses arguments, sets up logging and
//! reports errors.

#![warn(missing_docs)]

pub mod args;
pub mod commands;
pub mod coverage;
pub mod filter;
pub mod hexdump;
pub mod input;
pub mod text;

use clap::Subcommand;

pub use args::{ForkArgs, ForkType, ProdosArgs};

/// `asu` subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Display information about an AppleSingle file
    Info(commands::info::InfoArgs),

    /// Create an AppleSingle file
    Create(commands::create::CreateArgs),

    /// Edit an AppleSingle file
    Edit(commands::edit::EditArgs),

    /// Extract contents of an AppleSingle file
    Extract(commands::extract::ExtractArgs),

    /// Filter the entries of an AppleSingle file
    Filter(commands::filter::FilterArgs),

    /// Perform an analysis on an AppleSingle file
    Analyze(commands::analyze::AnalyzeArgs),
}
