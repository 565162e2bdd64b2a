use std::io;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::NameList;
use super::filter::is_listed;
use crate::error::ListError;

/// List the regular, non-hidden files directly inside `root`, sorted by
/// unsigned byte value.
///
/// The walk does not descend into subdirectories and does not follow
/// symlinks below the root. A root that is itself a symlink to a directory is
/// followed.
///
/// Fails with [`ListError::DirectoryOpen`] when `root` is missing, is not a
/// directory, or cannot be read. Errors on individual entries after the
/// directory has been opened are logged and the entry is skipped.
pub fn list_files(root: &Path) -> Result<NameList, ListError> {
    let mut names = NameList::new();
    debug!("listing {}", root.display());

    // The iterator owns the open directory handle; it is closed when the
    // iterator is dropped, on every return path.
    let walker = WalkDir::new(root)
        .max_depth(1)
        .follow_links(false)
        .follow_root_links(true);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            // Depth 0 is the root itself: either the stat or the open failed.
            Err(err) if err.depth() == 0 => {
                return Err(ListError::directory_open(root, err));
            }
            Err(err) => {
                warn!("skipping unreadable entry in {}: {}", root.display(), err);
                continue;
            }
        };

        if entry.depth() == 0 {
            if !is_dir_root(&entry) {
                return Err(ListError::directory_open(
                    root,
                    io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
                ));
            }
            continue;
        }

        if is_listed(entry.file_name(), entry.file_type()) {
            names.push(entry.file_name());
        }
    }

    names.sort();
    debug!("found {} files in {}", names.len(), root.display());
    Ok(names)
}

/// The root entry's type is not followed even when walkdir descends through a
/// root symlink, so resolve it here.
fn is_dir_root(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}
