use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::config::PlotConfig;

use super::model::GradientSeries;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure modes of a single gradient-file read. Any of these aborts the
/// whole read; there is no recovery or partial result.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("cannot open file: {0}")]
    NotFound(std::io::Error),

    #[error("i/o error while reading: {0}")]
    Io(std::io::Error),

    #[error("line {line}: first token '{token}' is not a number")]
    Parse { line: usize, token: String },

    #[error("end of input reached before the terminating blank line")]
    EndOfInput,
}

// ---------------------------------------------------------------------------
// Gradient file reader
// ---------------------------------------------------------------------------

/// Read one gradient history file into an ordered `Vec<f64>`.
///
/// Format: one value as the first whitespace-delimited token per line, the
/// sequence terminated by a single empty line. The blank line is a designed
/// end-of-data sentinel written by the solver, not an end-of-file signal: a
/// file that hits physical EOF without it fails with [`ReadError::EndOfInput`]
/// rather than silently truncating.
pub fn read_gradient_file(path: &Path) -> Result<Vec<f64>, ReadError> {
    let file = File::open(path).map_err(ReadError::NotFound)?;
    let reader = BufReader::new(file);

    let mut values = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(ReadError::Io)?;

        if line.is_empty() {
            return Ok(values);
        }

        let token = line.split_whitespace().next().unwrap_or("");
        let value = token.parse::<f64>().map_err(|_| ReadError::Parse {
            line: idx + 1,
            token: token.to_string(),
        })?;
        values.push(value);
    }

    Err(ReadError::EndOfInput)
}

// ---------------------------------------------------------------------------
// Configured startup load
// ---------------------------------------------------------------------------

/// Read every configured series, in configuration order.
///
/// All-or-nothing: the first failing file aborts the load, so the viewer
/// never opens with a partial set of traces. Each file is fully read and
/// closed before the next is opened.
pub fn load_configured_series(config: &PlotConfig) -> Result<Vec<GradientSeries>> {
    let mut series = Vec::with_capacity(config.series.len());

    for spec in &config.series {
        let path = spec.resolved_path(&config.base_dir);
        let values = read_gradient_file(&path)
            .with_context(|| format!("reading gradient series '{}'", path.display()))?;

        log::info!("loaded {} design points from {}", values.len(), path.display());
        series.push(GradientSeries::new(spec.clone(), values));
    }

    Ok(series)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn file_with(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn reads_values_up_to_sentinel() {
        let f = file_with("1.0\n0.5\n0.25\n\n");
        assert_eq!(read_gradient_file(f.path()).unwrap(), vec![1.0, 0.5, 0.25]);
    }

    #[test]
    fn ignores_trailing_content_after_sentinel() {
        let f = file_with("3.0\n2.0\n\nnot data\nalso ignored\n");
        assert_eq!(read_gradient_file(f.path()).unwrap(), vec![3.0, 2.0]);
    }

    #[test]
    fn takes_first_token_of_each_line() {
        let f = file_with("1.5 extra columns here\n2.5\t0.0\n\n");
        assert_eq!(read_gradient_file(f.path()).unwrap(), vec![1.5, 2.5]);
    }

    #[test]
    fn leading_blank_line_yields_empty_series() {
        let f = file_with("\n1.0\n");
        assert_eq!(read_gradient_file(f.path()).unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn non_numeric_token_is_a_parse_error() {
        let f = file_with("abc\n\n");
        match read_gradient_file(f.path()) {
            Err(ReadError::Parse { line, token }) => {
                assert_eq!(line, 1);
                assert_eq!(token, "abc");
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn parse_error_reports_line_number() {
        let f = file_with("1.0\n0.5\nboom\n\n");
        match read_gradient_file(f.path()) {
            Err(ReadError::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn missing_sentinel_is_end_of_input() {
        let f = file_with("1.0\n0.5\n0.25\n");
        assert!(matches!(
            read_gradient_file(f.path()),
            Err(ReadError::EndOfInput)
        ));
    }

    #[test]
    fn empty_file_is_end_of_input() {
        let f = file_with("");
        assert!(matches!(
            read_gradient_file(f.path()),
            Err(ReadError::EndOfInput)
        ));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_gradient.txt");
        assert!(matches!(
            read_gradient_file(&path),
            Err(ReadError::NotFound(_))
        ));
    }

    #[test]
    fn round_trip_preserves_values() {
        let values = [12.75, -3.5, 0.0625, 1e-8, -0.0];
        let mut f = NamedTempFile::new().unwrap();
        for v in values {
            writeln!(f, "{v}").unwrap();
        }
        writeln!(f).unwrap();

        assert_eq!(read_gradient_file(f.path()).unwrap(), values);
    }
}
