//! Directory entries produced by listings.

use crate::path::DELIMITER;

/// What kind of child an entry names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A plain object.
    File,
    /// A common prefix one level below the listed directory.
    Directory,
}

/// One immediate child of a listed directory.
///
/// Entries are lightweight descriptors tied to the listing call that
/// produced them; they hold no handle and no store connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub(crate) prefix: String,
    pub(crate) raw_key: String,
    pub(crate) kind: EntryKind,
}

impl DirEntry {
    /// The display name: the raw key with the listing prefix stripped from
    /// the left and any trailing delimiter removed.
    #[must_use]
    pub fn name(&self) -> &str {
        let name = self.raw_key.strip_prefix(&self.prefix).unwrap_or(&self.raw_key);
        name.strip_suffix(DELIMITER).unwrap_or(name)
    }

    /// The full key (or common prefix) as the store reported it.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.raw_key
    }

    #[must_use]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    #[must_use]
    pub fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }
}
