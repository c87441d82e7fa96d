//! `asu edit`

use crate::args::{ForkArgs, ProdosArgs};
use crate::commands::create::save;
use crate::input::read_source;
use anyhow::{Context, Result, bail};
use applesingle::{AppleSingle, AppleSingleBuilder};
use chrono::{DateTime, Utc};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Arguments for `edit`
#[derive(Debug, Args)]
#[command(after_help = "Dates are RFC 3339, e.g. '2007-12-03T10:15:30Z'.\n\
                        Known ProDOS file types: TXT, BIN, INT, BAS, REL, SYS.")]
pub struct EditArgs {
    /// Read the AppleSingle file from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Write the AppleSingle file to stdout
    #[arg(long)]
    pub stdout: bool,

    /// Fork sources
    #[command(flatten)]
    pub forks: ForkArgs,

    /// ProDOS name, file type and aux type
    #[command(flatten)]
    pub prodos: ProdosArgs,

    /// Set the file creation date
    #[arg(long, value_parser = parse_instant)]
    pub creation_date: Option<DateTime<Utc>>,

    /// Set the file modification date
    #[arg(long, value_parser = parse_instant)]
    pub modification_date: Option<DateTime<Utc>>,

    /// Set the file backup date
    #[arg(long, value_parser = parse_instant)]
    pub backup_date: Option<DateTime<Utc>>,

    /// Set the file access date
    #[arg(long, value_parser = parse_instant)]
    pub access_date: Option<DateTime<Utc>>,

    /// AppleSingle file to modify
    pub file: Option<PathBuf>,
}

/// Parse an RFC 3339 date into UTC
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| format!("invalid date '{value}': {e}"))
}

impl EditArgs {
    /// Check the argument combination before touching any file
    pub fn validate(&self) -> Result<()> {
        if self.stdin == self.file.is_some() {
            bail!("Please choose one of stdin or input file for original");
        }
        if self.stdin && !self.stdout {
            bail!("Please choose one of stdout or output file");
        }
        if self.stdin && self.forks.stdin_fork.is_some() {
            bail!("Stdin is already used for the original archive");
        }
        self.forks.validate()
    }

    /// Apply the requested changes to `original`
    pub fn apply(&self, original: AppleSingle) -> Result<AppleSingle> {
        let forks = self.forks.load()?;
        let mut builder = AppleSingleBuilder::from_archive(original);
        self.prodos.apply(&mut builder, self.forks.data_fork.as_deref())?;
        if let Some(data) = forks.data {
            builder.data_fork(data);
        }
        if let Some(resource) = forks.resource {
            builder.resource_fork(resource);
        }
        if let Some(path) = self.forks.timestamp_source() {
            apply_file_times(&mut builder, path)?;
        }
        if let Some(date) = self.creation_date {
            builder.creation_instant(date);
        }
        if let Some(date) = self.modification_date {
            builder.modification_instant(date);
        }
        if let Some(date) = self.backup_date {
            builder.backup_instant(date);
        }
        if let Some(date) = self.access_date {
            builder.access_instant(date);
        }
        Ok(builder.build())
    }
}

/// Copy a fork file's timestamps into the archive dates
///
/// Timestamps the platform cannot report are left untouched.
fn apply_file_times(builder: &mut AppleSingleBuilder, path: &Path) -> Result<()> {
    let metadata = fs::metadata(path)
        .with_context(|| format!("Failed to read attributes of '{}'", path.display()))?;
    if let Ok(created) = metadata.created() {
        builder.creation_instant(DateTime::<Utc>::from(created));
    } else {
        debug!("No creation time for '{}'", path.display());
    }
    if let Ok(modified) = metadata.modified() {
        builder.modification_instant(DateTime::<Utc>::from(modified));
    }
    if let Ok(accessed) = metadata.accessed() {
        builder.access_instant(DateTime::<Utc>::from(accessed));
    }
    Ok(())
}

/// Edit an existing archive
pub fn handle(args: &EditArgs) -> Result<()> {
    args.validate()?;
    let data = read_source(args.file.as_deref(), args.stdin)?;
    let original = AppleSingle::read(&data).context("Not a readable AppleSingle file")?;
    let edited = args.apply(original)?;
    let target = if args.stdout { None } else { args.file.as_deref() };
    save(&edited, target)
}
