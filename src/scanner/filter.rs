use std::ffi::OsStr;
use std::fs::FileType;

/// Returns true when a directory entry belongs in the listing.
///
/// Only regular files are listed. The type comes from the entry itself, so a
/// symlink is never listed even when it points at a regular file.
pub fn is_listed(name: &OsStr, file_type: FileType) -> bool {
    file_type.is_file() && is_visible_name(name)
}

/// Returns true for names that are not hidden and are not `.` or `..`.
pub fn is_visible_name(name: &OsStr) -> bool {
    let bytes = name.as_encoded_bytes();
    !bytes.is_empty() && bytes[0] != b'.' && name != "." && name != ".."
}
