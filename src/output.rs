//! Output formatting and writing.
//!
//! Records are rendered one per line as `prefix + suffix => whole`, joined
//! by `\n` with no trailing newline. The whole report is built in memory
//! and written with a single `write_all` into a freshly truncated file, so a
//! destination never ends up holding a mix of old and new content.

use crate::errors::{DataAccessError, Result};
use crate::matcher::MatchRecord;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Pure function rendering records into the output file format.
#[must_use]
pub fn render(records: &[MatchRecord<'_>]) -> String {
    records
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write rendered records to any writer.
///
/// `destination` only labels errors.
pub fn write_matches<W: Write>(
    mut writer: W,
    records: &[MatchRecord<'_>],
    destination: &Path,
) -> Result<()> {
    writer
        .write_all(render(records).as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| DataAccessError::write(destination, e))
}

/// Create or truncate `path` and write `records` to it.
pub fn write_output(path: &Path, records: &[MatchRecord<'_>]) -> Result<()> {
    let file = File::create(path).map_err(|e| DataAccessError::write(path, e))?;
    write_matches(file, records, path)?;

    tracing::debug!(path = %path.display(), records = records.len(), "output written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AccessKind;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::io;

    const INDOOR: MatchRecord<'static> = MatchRecord {
        prefix: "in",
        suffix: "door",
        whole: "indoor",
    };
    const SUNSET: MatchRecord<'static> = MatchRecord {
        prefix: "sun",
        suffix: "set",
        whole: "sunset",
    };

    #[test]
    fn render_joins_without_trailing_newline() {
        assert_eq!(
            render(&[INDOOR, SUNSET]),
            "in + door => indoor\nsun + set => sunset"
        );
    }

    #[test]
    fn render_empty_is_empty() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn write_matches_to_buffer() {
        let mut buffer = Vec::new();
        write_matches(&mut buffer, &[INDOOR], Path::new("memory")).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "in + door => indoor");
    }

    /// Accepts a few bytes, then fails like a full disk.
    struct FullDisk {
        room: usize,
    }

    impl Write for FullDisk {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.room == 0 {
                return Err(io::Error::new(io::ErrorKind::Other, "no space left"));
            }
            let n = buf.len().min(self.room);
            self.room -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_matches_failure_is_write_error() {
        let err = write_matches(FullDisk { room: 4 }, &[INDOOR, SUNSET], Path::new("disk.txt"))
            .unwrap_err();

        assert_eq!(err.kind(), AccessKind::Write);
        assert_eq!(err.path(), Path::new("disk.txt"));
        assert_eq!(err.io_kind(), io::ErrorKind::Other);
    }

    #[test]
    fn write_output_of_nothing_creates_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "previous report").unwrap();

        write_output(&path, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn write_output_truncates_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "stale content that is much longer than the new report\n").unwrap();

        write_output(&path, &[INDOOR]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "in + door => indoor");
    }

    #[test]
    fn write_output_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.txt");

        let err = write_output(&path, &[INDOOR]).unwrap_err();

        assert_eq!(err.kind(), AccessKind::Write);
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn write_output_to_directory_fails() {
        let dir = tempfile::tempdir().unwrap();

        let err = write_output(dir.path(), &[]).unwrap_err();

        assert_eq!(err.kind(), AccessKind::Write);
    }
}
