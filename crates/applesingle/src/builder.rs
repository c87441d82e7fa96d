//! AppleSingle builder
//!
//! Setters validate their input as it arrives. A rejected call leaves the
//! builder unchanged, and [`AppleSingleBuilder::build`] performs no further
//! checks. A missing data fork is not an error here; the archive is simply
//! written without that entry.

use crate::archive::AppleSingle;
use crate::dates::seconds_from_instant;
use crate::error::Result;
use crate::name::sanitize_prodos_name;
use chrono::{DateTime, Utc};

/// Builder for [`AppleSingle`] archives
#[derive(Debug, Clone)]
pub struct AppleSingleBuilder {
    archive: AppleSingle,
}

impl AppleSingleBuilder {
    /// Builder with standard BIN ProDOS info and every date set to now
    pub fn new() -> Self {
        Self {
            archive: AppleSingle::empty(),
        }
    }

    /// Builder seeded with the contents of an existing archive
    pub fn from_archive(archive: AppleSingle) -> Self {
        Self { archive }
    }

    /// Set the real name, sanitized to ProDOS rules
    ///
    /// Fails with [`crate::AppleSingleError::InvalidRealName`] when the name is
    /// empty or does not start with a letter.
    pub fn real_name(&mut self, name: &str) -> Result<&mut Self> {
        self.archive.real_name = Some(sanitize_prodos_name(name)?);
        Ok(self)
    }

    /// Set the data fork
    pub fn data_fork(&mut self, data: Vec<u8>) -> &mut Self {
        self.archive.data_fork = Some(data);
        self
    }

    /// Set the resource fork
    pub fn resource_fork(&mut self, data: Vec<u8>) -> &mut Self {
        self.archive.resource_fork = Some(data);
        self
    }

    /// Set the ProDOS access bits
    pub fn access(&mut self, access: u16) -> &mut Self {
        self.archive.prodos_info.access = access;
        self
    }

    /// Set the ProDOS file type
    pub fn file_type(&mut self, file_type: u16) -> &mut Self {
        self.archive.prodos_info.file_type = file_type;
        self
    }

    /// Set the ProDOS aux type
    pub fn aux_type(&mut self, aux_type: u32) -> &mut Self {
        self.archive.prodos_info.aux_type = aux_type;
        self
    }

    /// Set the creation date in seconds from 2000-01-01
    pub fn creation_date(&mut self, seconds: i32) -> &mut Self {
        self.archive.dates_info.creation = seconds;
        self
    }

    /// Set the modification date in seconds from 2000-01-01
    pub fn modification_date(&mut self, seconds: i32) -> &mut Self {
        self.archive.dates_info.modification = seconds;
        self
    }

    /// Set the backup date in seconds from 2000-01-01
    pub fn backup_date(&mut self, seconds: i32) -> &mut Self {
        self.archive.dates_info.backup = seconds;
        self
    }

    /// Set the access date in seconds from 2000-01-01
    pub fn access_date(&mut self, seconds: i32) -> &mut Self {
        self.archive.dates_info.access = seconds;
        self
    }

    /// Set the creation date from an instant
    pub fn creation_instant(&mut self, instant: DateTime<Utc>) -> &mut Self {
        self.creation_date(seconds_from_instant(instant))
    }

    /// Set the modification date from an instant
    pub fn modification_instant(&mut self, instant: DateTime<Utc>) -> &mut Self {
        self.modification_date(seconds_from_instant(instant))
    }

    /// Set the backup date from an instant
    pub fn backup_instant(&mut self, instant: DateTime<Utc>) -> &mut Self {
        self.backup_date(seconds_from_instant(instant))
    }

    /// Set the access date from an instant
    pub fn access_instant(&mut self, instant: DateTime<Utc>) -> &mut Self {
        self.access_date(seconds_from_instant(instant))
    }

    /// Set all four dates to the same instant
    pub fn all_dates(&mut self, instant: DateTime<Utc>) -> &mut Self {
        self.creation_instant(instant)
            .modification_instant(instant)
            .backup_instant(instant)
            .access_instant(instant)
    }

    /// Finish construction
    pub fn build(self) -> AppleSingle {
        self.archive
    }
}

impl Default for AppleSingleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
