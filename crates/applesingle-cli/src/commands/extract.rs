//! `asu extract`

use crate::args::ForkType;
use crate::input::{read_source, write_file, write_stdout};
use crate::text::from_apple_text;
use anyhow::{Context, Result, bail};
use applesingle::AppleSingle;
use clap::Args;
use std::path::{Path, PathBuf};

/// Arguments for `extract`
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Write the selected fork to stdout
    #[arg(long)]
    pub stdout: bool,

    /// Read the AppleSingle file from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Clear the high bit and convert CR to LF
    #[arg(long)]
    pub fix_text: bool,

    /// Which fork to extract
    #[arg(long, value_enum, default_value_t = ForkType::Data)]
    pub fork: ForkType,

    /// Base file name for the extracted fork(s)
    #[arg(short, long)]
    pub output: Option<String>,

    /// File to process
    pub file: Option<PathBuf>,
}

impl ExtractArgs {
    /// Check the argument combination before touching any file
    pub fn validate(&self) -> Result<()> {
        if self.stdout && self.output.is_some() {
            bail!("Please choose one of stdout or output file");
        }
        if self.stdout && self.fork == ForkType::Both {
            bail!("Stdout only supports one type of fork for output");
        }
        Ok(())
    }

    /// Forks selected for extraction, converted as requested
    ///
    /// A requested fork that is missing or empty is an error.
    pub fn selected_forks(&self, archive: AppleSingle) -> Result<Vec<(ForkType, Vec<u8>)>> {
        let (data, resource) = archive.into_forks();
        let mut selected = Vec::with_capacity(2);
        for (fork, content) in [(ForkType::Data, data), (ForkType::Resource, resource)] {
            if !self.fork.selects(fork) {
                continue;
            }
            let Some(mut content) = content.filter(|c| !c.is_empty()) else {
                bail!("There is no data in the {fork} fork, aborting");
            };
            if self.fix_text {
                from_apple_text(&mut content);
            }
            selected.push((fork, content));
        }
        Ok(selected)
    }
}

/// Extract forks from an archive
pub fn handle(args: &ExtractArgs) -> Result<()> {
    args.validate()?;
    let data = read_source(args.file.as_deref(), args.stdin)?;
    let archive = AppleSingle::read(&data).context("Not a readable AppleSingle file")?;

    let base = match (&args.output, archive.real_name()) {
        _ if args.stdout => None,
        (Some(base), _) => Some(base.clone()),
        (None, Some(name)) => Some(base_from_real_name(name)?),
        (None, None) => bail!(
            "Please include an output base filename; this AppleSingle file does not contain a name"
        ),
    };

    for (fork, content) in args.selected_forks(archive)? {
        match &base {
            Some(base) => {
                let target = PathBuf::from(format!("{base}.{fork}"));
                println!("Writing {fork} fork to file '{}'...", target.display());
                write_file(&target, &content)?;
            }
            None => write_stdout(&content)?,
        }
    }
    Ok(())
}

/// Output base taken from an archive's real name
///
/// The name comes from untrusted input, so only its final path component is
/// used and output always lands in the current directory.
pub fn base_from_real_name(name: &str) -> Result<String> {
    match Path::new(name).file_name().and_then(|n| n.to_str()) {
        Some(base) if !base.is_empty() => Ok(base.to_string()),
        _ => bail!("Real name '{name}' is not a usable file name; please include an output base filename"),
    }
}
