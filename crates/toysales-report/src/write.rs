use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::ReportError;

/// Where a rendered report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportDestination {
    /// Named file, created or truncated.
    File(PathBuf),
    Stdout,
}

impl fmt::Display for ReportDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportDestination::File(path) => write!(f, "{}", path.display()),
            ReportDestination::Stdout => write!(f, "stdout"),
        }
    }
}

/// Writes each line followed by `\n`, in order, then flushes.
///
/// # Errors
///
/// Returns any I/O error raised by `out`.
pub fn write_lines<W: Write>(lines: &[String], mut out: W) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

/// Writes a rendered report to `destination`.
///
/// The file handle (or stdout lock) lives only for the duration of this
/// call and is released on every exit path.
///
/// # Errors
///
/// Returns [`ReportError::Write`] if the destination cannot be created or
/// written.
pub fn write_report(lines: &[String], destination: &ReportDestination) -> Result<(), ReportError> {
    let result = match destination {
        ReportDestination::File(path) => {
            File::create(path).and_then(|file| write_lines(lines, BufWriter::new(file)))
        }
        ReportDestination::Stdout => write_lines(lines, io::stdout().lock()),
    };

    result.map_err(|source| ReportError::Write {
        destination: destination.to_string(),
        source,
    })?;

    tracing::info!(%destination, lines = lines.len(), "wrote sales report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_lines_terminates_every_line() {
        let lines = vec!["first".to_string(), String::new(), "third".to_string()];
        let mut buf = Vec::new();
        write_lines(&lines, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "first\n\nthird\n");
    }

    #[test]
    fn write_lines_empty_writes_nothing() {
        let mut buf = Vec::new();
        write_lines(&[], &mut buf).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn write_report_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        std::fs::write(&path, "stale contents that are much longer than the new report\n").unwrap();

        let destination = ReportDestination::File(path.clone());
        write_report(&["fresh".to_string()], &destination).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn write_report_missing_directory_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("report.txt");
        let destination = ReportDestination::File(path);

        let err = write_report(&["x".to_string()], &destination).unwrap_err();
        assert!(matches!(err, ReportError::Write { .. }), "got: {err:?}");
        assert!(err.to_string().contains("report.txt"), "got: {err}");
    }

    #[test]
    fn write_report_to_stdout_succeeds() {
        // Empty input keeps the test harness output clean.
        write_report(&[], &ReportDestination::Stdout).unwrap();
    }

    #[test]
    fn destination_display() {
        assert_eq!(ReportDestination::Stdout.to_string(), "stdout");
        assert_eq!(
            ReportDestination::File(PathBuf::from("report.txt")).to_string(),
            "report.txt"
        );
    }
}
