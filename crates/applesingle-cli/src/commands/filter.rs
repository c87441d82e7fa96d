//! `asu filter`

use crate::filter::{EntryFilter, OsFilter};
use crate::input::{parse_number, read_source, write_file, write_stdout};
use anyhow::{Context, Result, bail};
use applesingle::{AppleSingle, write_entries};
use clap::Args;
use std::path::PathBuf;

/// Operating system profile flags; at most one may be given
#[derive(Debug, Clone, Copy, Default, Args)]
#[group(multiple = false)]
pub struct OsArgs {
    /// Keep only ProDOS entry types
    #[arg(long)]
    pub prodos: bool,

    /// Keep only Macintosh entry types
    #[arg(long, alias = "macintosh")]
    pub mac: bool,

    /// Keep only MS-DOS entry types
    #[arg(long)]
    pub msdos: bool,

    /// Keep only AFP entry types
    #[arg(long)]
    pub afp: bool,
}

impl OsArgs {
    /// Selected profile, if any
    pub fn selected(self) -> Option<OsFilter> {
        if self.prodos {
            Some(OsFilter::Prodos)
        } else if self.mac {
            Some(OsFilter::Macintosh)
        } else if self.msdos {
            Some(OsFilter::MsDos)
        } else if self.afp {
            Some(OsFilter::Afp)
        } else {
            None
        }
    }
}

/// Arguments for `filter`
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Read the AppleSingle file from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Write the AppleSingle file to stdout
    #[arg(long)]
    pub stdout: bool,

    /// Write the AppleSingle file to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Operating system profile selecting the entries to keep
    #[command(flatten)]
    pub os: OsArgs,

    /// Keep only these entry type ids (comma separated)
    #[arg(long, value_delimiter = ',', value_parser = parse_number)]
    pub include: Vec<u32>,

    /// Drop these entry type ids (comma separated)
    #[arg(long, value_delimiter = ',', value_parser = parse_number)]
    pub exclude: Vec<u32>,

    /// File to process
    pub file: Option<PathBuf>,
}

/// Filter entries of an archive at the entry level
///
/// Uninterpreted entries pass through untouched unless a rule drops them.
pub fn handle(args: &FilterArgs) -> Result<()> {
    if args.stdout == args.output.is_some() {
        bail!("Please choose one of stdout or output file");
    }
    let data = read_source(args.file.as_deref(), args.stdin)?;
    let entries = AppleSingle::read_entries(&data).context("Not a readable AppleSingle file")?;

    let filter = EntryFilter::new(&args.include, &args.exclude, args.os.selected());
    let outcome = filter.apply(entries);
    let bytes = write_entries(&outcome.kept)?;

    match &args.output {
        Some(path) => {
            if outcome.removed.is_empty() {
                println!("No entries removed.");
            } else {
                println!("Removed the following entries:");
                for entry_type in &outcome.removed {
                    println!("- {entry_type}");
                }
            }
            write_file(path, &bytes)
        }
        None => write_stdout(&bytes),
    }
}
