//! Entry-level filtering for `filter`

use applesingle::{Entry, EntryType};
use std::collections::BTreeSet;

/// Entry types relevant to one operating system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFilter {
    /// Apple II ProDOS
    Prodos,
    /// Classic Macintosh
    Macintosh,
    /// MS-DOS
    MsDos,
    /// AppleShare / AFP servers
    Afp,
}

impl OsFilter {
    /// Entry types kept by this filter
    pub fn entry_types(self) -> &'static [EntryType] {
        match self {
            Self::Prodos => &[
                EntryType::DataFork,
                EntryType::ResourceFork,
                EntryType::RealName,
                EntryType::FileDatesInfo,
                EntryType::ProdosFileInfo,
            ],
            Self::Macintosh => &[
                EntryType::DataFork,
                EntryType::ResourceFork,
                EntryType::RealName,
                EntryType::Comment,
                EntryType::IconBw,
                EntryType::IconColor,
                EntryType::FileDatesInfo,
                EntryType::FinderInfo,
                EntryType::MacintoshFileInfo,
            ],
            Self::MsDos => &[
                EntryType::DataFork,
                EntryType::RealName,
                EntryType::FileDatesInfo,
                EntryType::MsDosFileInfo,
            ],
            Self::Afp => &[
                EntryType::DataFork,
                EntryType::RealName,
                EntryType::FileDatesInfo,
                EntryType::ShortName,
                EntryType::AfpFileInfo,
                EntryType::DirectoryId,
            ],
        }
    }
}

/// Include/exclude rule over entry type ids
///
/// An empty include set keeps everything not excluded.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    include: BTreeSet<u32>,
    exclude: BTreeSet<u32>,
}

/// Result of applying an [`EntryFilter`]
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    /// Entries that passed, in their original order
    pub kept: Vec<Entry>,
    /// Entry types present before filtering and absent afterwards
    pub removed: BTreeSet<EntryType>,
}

impl EntryFilter {
    /// Build a filter; the OS profile adds to the include set
    pub fn new(include: &[u32], exclude: &[u32], os: Option<OsFilter>) -> Self {
        let mut include: BTreeSet<u32> = include.iter().copied().collect();
        if let Some(os) = os {
            include.extend(os.entry_types().iter().map(|t| t.id()));
        }
        Self {
            include,
            exclude: exclude.iter().copied().collect(),
        }
    }

    /// Whether an entry with this type id survives
    pub fn keeps(&self, entry_id: u32) -> bool {
        (self.include.is_empty() || self.include.contains(&entry_id))
            && !self.exclude.contains(&entry_id)
    }

    /// Filter entries, reporting which types disappeared
    pub fn apply(&self, entries: Vec<Entry>) -> FilterOutcome {
        let before: BTreeSet<EntryType> = entries.iter().map(Entry::entry_type).collect();
        let kept: Vec<Entry> = entries
            .into_iter()
            .filter(|e| self.keeps(e.entry_id))
            .collect();
        let after: BTreeSet<EntryType> = kept.iter().map(Entry::entry_type).collect();
        FilterOutcome {
            kept,
            removed: before.difference(&after).copied().collect(),
        }
    }
}
