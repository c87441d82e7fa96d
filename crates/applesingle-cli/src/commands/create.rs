//! `asu create`

use crate::args::{ForkArgs, ProdosArgs};
use crate::input::{write_file, write_stdout};
use anyhow::{Result, bail};
use applesingle::{AppleSingle, AppleSingleBuilder};
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Arguments for `create`
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Write the AppleSingle file to stdout
    #[arg(long)]
    pub stdout: bool,

    /// Fork sources
    #[command(flatten)]
    pub forks: ForkArgs,

    /// ProDOS name, file type and aux type
    #[command(flatten)]
    pub prodos: ProdosArgs,

    /// AppleSingle file to create
    pub file: Option<PathBuf>,
}

impl CreateArgs {
    /// Check the argument combination before touching any file
    pub fn validate(&self) -> Result<()> {
        if self.stdout == self.file.is_some() {
            bail!("Please choose one of stdout or output file");
        }
        self.forks.validate()?;
        if !self.forks.any() {
            bail!("Please select at least one fork type");
        }
        Ok(())
    }

    /// Assemble the archive from the fork sources
    pub fn build(&self) -> Result<AppleSingle> {
        let forks = self.forks.load()?;
        let mut builder = AppleSingleBuilder::new();
        self.prodos.apply(&mut builder, self.forks.data_fork.as_deref())?;
        if let Some(data) = forks.data {
            builder.data_fork(data);
        }
        if let Some(resource) = forks.resource {
            builder.resource_fork(resource);
        }
        Ok(builder.build())
    }
}

/// Create a new archive
pub fn handle(args: &CreateArgs) -> Result<()> {
    args.validate()?;
    let archive = args.build()?;
    save(&archive, args.file.as_deref())
}

/// Write an archive to `file`, or to stdout when no file is given
pub fn save(archive: &AppleSingle, file: Option<&Path>) -> Result<()> {
    let bytes = archive.write()?;
    debug!("Serialized archive: {} bytes", bytes.len());
    match file {
        Some(path) => {
            write_file(path, &bytes)?;
            println!("Saved to '{}'.", path.display());
            Ok(())
        }
        None => write_stdout(&bytes),
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::args::ForkType;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn args(stdout: bool, file: Option<PathBuf>, forks: ForkArgs) -> CreateArgs {
        CreateArgs {
            stdout,
            forks,
            prodos: ProdosArgs::default(),
            file,
        }
    }

    #[test]
    fn test_validate_output_choice() {
        let forks = ForkArgs {
            stdin_fork: Some(ForkType::Data),
            ..ForkArgs::default()
        };
        assert!(args(false, None, forks.clone()).validate().is_err());
        assert!(args(true, Some("a.as".into()), forks.clone()).validate().is_err());
        assert!(args(true, None, forks).validate().is_ok());
    }

    #[test]
    fn test_validate_requires_fork() {
        assert!(args(true, None, ForkArgs::default()).validate().is_err());
    }

    #[test]
    fn test_build_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("hello.txt");
        fs::write(&data, b"Hello\n").unwrap();

        let mut create = args(
            true,
            None,
            ForkArgs {
                data_fork: Some(data),
                fix_text: true,
                ..ForkArgs::default()
            },
        );
        create.prodos.filetype = Some(0x04);
        let archive = create.build().unwrap();

        assert_eq!(archive.real_name(), Some("HELLO.TXT"));
        assert_eq!(archive.prodos_info().file_type, 0x04);
        assert_eq!(
            archive.data_fork(),
            Some(&[0xC8, 0xE5, 0xEC, 0xEC, 0xEF, 0x8D][..])
        );
        assert_eq!(archive.resource_fork(), None);
    }
}
