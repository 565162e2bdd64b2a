//! Single-level directory scanning.
//!
//! [`walker::list_files`] enumerates one directory, keeps the entries that
//! pass [`filter::is_listed`], and returns them as a sorted [`NameList`].

pub mod filter;
pub mod walker;

use std::ffi::{OsStr, OsString};

/// Owned, growable list of file names collected during one scan.
///
/// Names are copied out of the directory stream as they are accepted, so the
/// list stays valid after the stream is closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameList(Vec<OsString>);

impl NameList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<OsString>) {
        self.0.push(name.into());
    }

    /// Sort ascending by unsigned byte value.
    ///
    /// Entry names within a directory are unique, so an unstable sort gives
    /// the same result as a stable one.
    pub fn sort(&mut self) {
        self.0
            .sort_unstable_by(|a, b| a.as_encoded_bytes().cmp(b.as_encoded_bytes()));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OsStr> {
        self.0.iter().map(OsString::as_os_str)
    }
}

impl<S: Into<OsString>> FromIterator<S> for NameList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        NameList(iter.into_iter().map(Into::into).collect())
    }
}
