use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors produced while listing a directory.
///
/// The `Display` text of `DirectoryOpen` is the exact diagnostic line the
/// command prints on stderr; callers may match on the `[ReadDir]` prefix.
#[derive(Debug, Error)]
pub enum ListError {
    /// The path is missing, is not a directory, or cannot be read.
    #[error("[ReadDir] Error while opening directory: {}.", path.display())]
    DirectoryOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ListError {
    pub fn directory_open(path: impl Into<PathBuf>, source: impl Into<io::Error>) -> Self {
        ListError::DirectoryOpen {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Path the failed operation was given.
    pub fn path(&self) -> &Path {
        match self {
            ListError::DirectoryOpen { path, .. } => path,
        }
    }
}
