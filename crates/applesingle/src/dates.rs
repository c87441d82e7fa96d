//! File Dates Info payload (entry type 8)
//!
//! Four big-endian signed 32-bit values counting seconds from
//! 2000-01-01T00:00:00Z: creation, modification, backup, access.
//! `0x80000000` marks a date as unknown.

use crate::error::{AppleSingleError, Result};
use chrono::{DateTime, Utc};

/// Payload size in bytes
pub const FILE_DATES_INFO_SIZE: usize = 16;

/// Sentinel for "date unknown"
pub const UNKNOWN_DATE: i32 = i32::MIN;

/// Seconds between the Unix epoch and 2000-01-01T00:00:00Z
pub const EPOCH_OFFSET_SECONDS: i64 = 946_684_800;

/// Convert an instant into format seconds
///
/// Sub-second precision is dropped. Instants outside the representable range
/// (roughly 1932 to 2068) become [`UNKNOWN_DATE`].
pub fn seconds_from_instant(instant: DateTime<Utc>) -> i32 {
    i32::try_from(instant.timestamp() - EPOCH_OFFSET_SECONDS).unwrap_or(UNKNOWN_DATE)
}

/// Convert format seconds into an instant, `None` for [`UNKNOWN_DATE`]
pub fn instant_from_seconds(seconds: i32) -> Option<DateTime<Utc>> {
    if seconds == UNKNOWN_DATE {
        return None;
    }
    DateTime::from_timestamp(EPOCH_OFFSET_SECONDS + i64::from(seconds), 0)
}

/// Creation, modification, backup and access dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileDatesInfo {
    /// Creation date
    pub creation: i32,
    /// Last modification date
    pub modification: i32,
    /// Last backup date
    pub backup: i32,
    /// Last access date
    pub access: i32,
}

impl FileDatesInfo {
    /// Create dates info from raw second values
    pub fn new(creation: i32, modification: i32, backup: i32, access: i32) -> Self {
        Self {
            creation,
            modification,
            backup,
            access,
        }
    }

    /// All four dates set to the same instant
    pub fn at(instant: DateTime<Utc>) -> Self {
        let seconds = seconds_from_instant(instant);
        Self::new(seconds, seconds, seconds, seconds)
    }

    /// All four dates set to the current time
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    /// All four dates unknown
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_DATE, UNKNOWN_DATE, UNKNOWN_DATE, UNKNOWN_DATE)
    }

    /// Parse the payload, ignoring any trailing bytes
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < FILE_DATES_INFO_SIZE {
            return Err(AppleSingleError::TruncatedData {
                offset: 0,
                length: FILE_DATES_INFO_SIZE,
                available: data.len(),
            });
        }

        let field = |pos: usize| {
            i32::from_be_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]])
        };
        Ok(Self::new(field(0), field(4), field(8), field(12)))
    }

    /// Serialize the payload
    pub fn build(&self) -> [u8; FILE_DATES_INFO_SIZE] {
        let mut out = [0u8; FILE_DATES_INFO_SIZE];
        out[0..4].copy_from_slice(&self.creation.to_be_bytes());
        out[4..8].copy_from_slice(&self.modification.to_be_bytes());
        out[8..12].copy_from_slice(&self.backup.to_be_bytes());
        out[12..16].copy_from_slice(&self.access.to_be_bytes());
        out
    }

    /// Creation date as an instant
    pub fn creation_instant(&self) -> Option<DateTime<Utc>> {
        instant_from_seconds(self.creation)
    }

    /// Modification date as an instant
    pub fn modification_instant(&self) -> Option<DateTime<Utc>> {
        instant_from_seconds(self.modification)
    }

    /// Backup date as an instant
    pub fn backup_instant(&self) -> Option<DateTime<Utc>> {
        instant_from_seconds(self.backup)
    }

    /// Access date as an instant
    pub fn access_instant(&self) -> Option<DateTime<Utc>> {
        instant_from_seconds(self.access)
    }
}
