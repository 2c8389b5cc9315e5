use std::fs;
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{MetricCollection, MetricSeries};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: '{text}' is not a number", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        text: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("file name of {} is not valid UTF-8", .0.display())]
    InvalidName(PathBuf),

    #[error("metric '{name}' is defined by more than one file ({})", .path.display())]
    DuplicateMetric { name: String, path: PathBuf },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load every regular file in `dir` as one metric.
///
/// Symlinks are followed; subdirectories are skipped. The first unreadable or malformed file aborts
/// the whole load.
pub fn load_dir(dir: &Path) -> Result<MetricCollection, LoadError> {
    let io_err = |source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut collection = MetricCollection::default();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let path = entry.path();
        let metadata = fs::metadata(&path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;
        if !metadata.is_file() {
            log::debug!("Skipping non-file entry {}", path.display());
            continue;
        }

        let series = load_series(&path)?;
        log::debug!("Loaded {} samples for '{}'", series.len(), series.name());
        if collection.get(series.name()).is_some() {
            return Err(LoadError::DuplicateMetric {
                name: series.name().to_string(),
                path,
            });
        }
        collection.insert(series);
    }

    Ok(collection)
}

/// Load a single metric file: one float per line, surrounding whitespace
/// ignored.
pub fn load_series(path: &Path) -> Result<MetricSeries, LoadError> {
    let name = metric_name(path)?;
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let samples = parse_samples(&text).map_err(|(line, text, source)| LoadError::Parse {
        path: path.to_path_buf(),
        line,
        text,
        source,
    })?;
    Ok(MetricSeries::new(name, samples))
}

/// Metric name of a data file: the file name without its extension.
pub fn metric_name(path: &Path) -> Result<String, LoadError> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .ok_or_else(|| LoadError::InvalidName(path.to_path_buf()))
}

/// Parse newline separated floats. On failure returns the 1-based line
/// number and the offending text.
fn parse_samples(text: &str) -> Result<Vec<f64>, (usize, String, ParseFloatError)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| {
            let tok = line.trim();
            tok.parse::<f64>()
                .map_err(|e| (i + 1, tok.to_string(), e))
        })
        .collect()
}
