//! Arguments shared by `create` and `edit`

use crate::input::{parse_file_type, parse_number, parse_u16, read_stdin};
use crate::text::to_apple_text;
use anyhow::{Context, Result, bail};
use applesingle::AppleSingleBuilder;
use clap::{Args, ValueEnum};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Fork selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ForkType {
    /// Data fork
    Data,
    /// Resource fork
    Resource,
    /// Both forks
    Both,
}

impl ForkType {
    /// Whether this selection includes `fork`
    pub fn selects(self, fork: Self) -> bool {
        self == fork || self == Self::Both
    }
}

impl fmt::Display for ForkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Data => "data",
            Self::Resource => "resource",
            Self::Both => "both",
        };
        f.write_str(name)
    }
}

/// Fork sources
#[derive(Debug, Clone, Default, Args)]
pub struct ForkArgs {
    /// Read a fork from stdin (data or resource)
    #[arg(long, value_enum)]
    pub stdin_fork: Option<ForkType>,

    /// Read the data fork from a file
    #[arg(long)]
    pub data_fork: Option<PathBuf>,

    /// Read the resource fork from a file
    #[arg(long)]
    pub resource_fork: Option<PathBuf>,

    /// Set the high bit and convert LF to CR in the data fork
    #[arg(long)]
    pub fix_text: bool,
}

/// Forks loaded from their sources
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedForks {
    /// Data fork bytes, if supplied
    pub data: Option<Vec<u8>>,
    /// Resource fork bytes, if supplied
    pub resource: Option<Vec<u8>>,
}

impl ForkArgs {
    /// Check the source combination
    pub fn validate(&self) -> Result<()> {
        match self.stdin_fork {
            Some(ForkType::Both) => bail!("Unable to read two forks from stdin"),
            Some(ForkType::Data) if self.data_fork.is_some() => {
                bail!("Stdin only supports one type of fork for input")
            }
            Some(ForkType::Resource) if self.resource_fork.is_some() => {
                bail!("Stdin only supports one type of fork for input")
            }
            _ => Ok(()),
        }
    }

    /// Whether any fork source was given
    pub fn any(&self) -> bool {
        self.stdin_fork.is_some() || self.data_fork.is_some() || self.resource_fork.is_some()
    }

    /// File whose timestamps describe the new content
    pub fn timestamp_source(&self) -> Option<&Path> {
        self.data_fork.as_deref().or(self.resource_fork.as_deref())
    }

    /// Read every requested fork
    pub fn load(&self) -> Result<LoadedForks> {
        let mut data = self.read_fork(ForkType::Data, self.data_fork.as_deref())?;
        if self.fix_text {
            if let Some(data) = data.as_mut() {
                to_apple_text(data);
            }
        }
        let resource = self.read_fork(ForkType::Resource, self.resource_fork.as_deref())?;
        Ok(LoadedForks { data, resource })
    }

    fn read_fork(&self, fork: ForkType, file: Option<&Path>) -> Result<Option<Vec<u8>>> {
        if self.stdin_fork == Some(fork) {
            return read_stdin().map(Some);
        }
        file.map(|path| {
            fs::read(path).with_context(|| format!("Failed to read {fork} fork '{}'", path.display()))
        })
        .transpose()
    }
}

/// Real name and ProDOS attributes
#[derive(Debug, Clone, Default, Args)]
pub struct ProdosArgs {
    /// Set the file name (defaults to the data fork's file name)
    #[arg(long)]
    pub name: Option<String>,

    /// Set the ProDOS access flags
    #[arg(long, value_parser = parse_u16)]
    pub access: Option<u16>,

    /// Set the ProDOS file type (number or TXT, BIN, INT, BAS, REL, SYS)
    #[arg(long, value_parser = parse_file_type)]
    pub filetype: Option<u16>,

    /// Set the ProDOS aux type
    #[arg(long, value_parser = parse_number)]
    pub auxtype: Option<u32>,
}

impl ProdosArgs {
    /// Apply the name and attributes to a builder
    ///
    /// Without `--name`, the file name of `data_fork` is used when present.
    pub fn apply(&self, builder: &mut AppleSingleBuilder, data_fork: Option<&Path>) -> Result<()> {
        let name = self.name.clone().or_else(|| {
            data_fork
                .and_then(Path::file_name)
                .map(|n| n.to_string_lossy().into_owned())
        });
        if let Some(name) = name {
            builder
                .real_name(&name)
                .with_context(|| format!("Unusable file name '{name}'"))?;
        }
        if let Some(access) = self.access {
            builder.access(access);
        }
        if let Some(file_type) = self.filetype {
            builder.file_type(file_type);
        }
        if let Some(aux_type) = self.auxtype {
            builder.aux_type(aux_type);
        }
        Ok(())
    }
}
