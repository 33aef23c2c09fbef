/// Insertion-ordered mapping from extension to file basenames.
///
/// Keys live in a flat `Vec` in first-seen order, with a `HashMap` from key
/// to position for O(1) lookup, the same arena-plus-lookup layout the
/// collector uses while walking. Lookup of an unknown extension yields an
/// empty slice rather than an error.
use compact_str::CompactString;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

use super::extension::extension_of;

/// The result of one collection run.
///
/// Immutable from outside the crate: only the collector appends to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionIndex {
    /// `(extension, basenames)` in first-seen order.
    entries: Vec<(CompactString, Vec<CompactString>)>,
    /// Extension -> position in `entries`.
    positions: HashMap<CompactString, usize>,
}

impl ExtensionIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` under its extension, creating the key on first sight.
    pub(crate) fn push(&mut self, name: CompactString) {
        let ext = extension_of(&name);
        let pos = match self.positions.get(ext) {
            Some(&pos) => pos,
            None => {
                let key = CompactString::new(ext);
                let pos = self.entries.len();
                self.positions.insert(key.clone(), pos);
                self.entries.push((key, Vec::new()));
                pos
            }
        };
        self.entries[pos].1.push(name);
    }

    /// Basenames recorded under `ext`, in traversal order.
    ///
    /// Unknown extensions return an empty slice.
    pub fn files(&self, ext: &str) -> &[CompactString] {
        self.positions
            .get(ext)
            .map(|&pos| self.entries[pos].1.as_slice())
            .unwrap_or(&[])
    }

    /// `true` if at least one file with extension `ext` was recorded.
    pub fn contains(&self, ext: &str) -> bool {
        self.positions.contains_key(ext)
    }

    /// Extensions in first-seen order.
    pub fn extensions(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(ext, _)| ext.as_str())
    }

    /// `(extension, basenames)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CompactString])> + '_ {
        self.entries
            .iter()
            .map(|(ext, names)| (ext.as_str(), names.as_slice()))
    }

    /// Number of distinct extensions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of files across all extensions.
    pub fn total_files(&self) -> usize {
        self.entries.iter().map(|(_, names)| names.len()).sum()
    }
}

/// Serialises as an object keyed by extension, preserving first-seen order.
impl Serialize for ExtensionIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (ext, names) in &self.entries {
            let names: Vec<&str> = names.iter().map(CompactString::as_str).collect();
            map.serialize_entry(ext.as_str(), &names)?;
        }
        map.end()
    }
}
