//! Output formatting for file listings.
//!
//! Names are written one per line. On Unix the raw name bytes are written
//! unchanged; elsewhere names that are not valid Unicode are rendered lossily.

use std::ffi::OsStr;
use std::io::{self, Write};

use crate::scanner::NameList;

/// Write every name followed by `\n`, then flush.
pub fn write_names<W: Write>(out: &mut W, names: &NameList) -> io::Result<()> {
    for name in names.iter() {
        write_name(out, name)?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

#[cfg(unix)]
fn write_name<W: Write>(out: &mut W, name: &OsStr) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;
    out.write_all(name.as_bytes())
}

#[cfg(not(unix))]
fn write_name<W: Write>(out: &mut W, name: &OsStr) -> io::Result<()> {
    out.write_all(name.to_string_lossy().as_bytes())
}
