use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::scanner::walker::list_files;
use crate::utils::format::write_names;

/// Exit status when every qualifying name was written.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status when the directory could not be opened.
pub const EXIT_OPEN_FAILURE: u8 = 1;

/// Run the listing: write the sorted file names of `path` to `out`.
///
/// A directory that cannot be opened is reported as a single diagnostic line
/// on `err` and yields [`EXIT_OPEN_FAILURE`]; nothing is written to `out`.
/// Any other I/O failure is returned as an error.
pub fn run<O, E>(path: &Path, out: &mut O, err: &mut E) -> Result<u8>
where
    O: Write,
    E: Write,
{
    let names = match list_files(path) {
        Ok(names) => names,
        Err(e) => {
            debug!("cannot open {}: {:?}", e.path().display(), e);
            writeln!(err, "{e}").context("failed to write diagnostic")?;
            err.flush().context("failed to write diagnostic")?;
            return Ok(EXIT_OPEN_FAILURE);
        }
    };

    match write_names(out, &names) {
        Ok(()) => {}
        // Reader went away (e.g. piped into `head`); nothing left to do.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("output closed early: {e}");
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to write listing of {}", path.display()));
        }
    }

    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Writer that fails every write with the given error kind.
    struct FailingWriter(io::ErrorKind);

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(self.0))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_run_lists_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.txt"), "").unwrap();
        fs::write(tmp.path().join("A.txt"), "").unwrap();
        fs::write(tmp.path().join("a.txt"), "").unwrap();

        let (mut out, mut err) = (Vec::new(), Vec::new());
        let code = run(tmp.path(), &mut out, &mut err).unwrap();

        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(String::from_utf8(out).unwrap(), "A.txt\na.txt\nb.txt\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_run_open_failure() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");

        let (mut out, mut err) = (Vec::new(), Vec::new());
        let code = run(&missing, &mut out, &mut err).unwrap();

        assert_eq!(code, EXIT_OPEN_FAILURE);
        assert!(out.is_empty());
        assert_eq!(
            String::from_utf8(err).unwrap(),
            format!("[ReadDir] Error while opening directory: {}.\n", missing.display())
        );
    }

    #[test]
    fn test_run_empty_directory() {
        let tmp = TempDir::new().unwrap();

        let (mut out, mut err) = (Vec::new(), Vec::new());
        let code = run(tmp.path(), &mut out, &mut err).unwrap();

        assert_eq!(code, EXIT_SUCCESS);
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn test_run_broken_pipe_is_success() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "").unwrap();

        let mut out = FailingWriter(io::ErrorKind::BrokenPipe);
        let mut err = Vec::new();
        let code = run(tmp.path(), &mut out, &mut err).unwrap();

        assert_eq!(code, EXIT_SUCCESS);
    }

    #[test]
    fn test_run_write_error_propagates() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "").unwrap();

        let mut out = FailingWriter(io::ErrorKind::PermissionDenied);
        let mut err = Vec::new();
        assert!(run(tmp.path(), &mut out, &mut err).is_err());
    }
}
