use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("data file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("missing column `{column}` (available columns: {})", available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    #[error("malformed value in column `{column}` at line {line}: {message}")]
    MalformedValue {
        line: u64,
        column: String,
        message: String,
    },

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to draw chart \"{title}\": {message}")]
    Draw { title: String, message: String },

    #[error("I/O error writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("failed to load data for {moon}")]
    Load {
        moon: String,
        #[source]
        source: LoadError,
    },

    #[error("failed to render charts for {moon}")]
    Render {
        moon: String,
        #[source]
        source: RenderError,
    },
}

impl DriverError {
    pub fn moon(&self) -> &str {
        match self {
            DriverError::Load { moon, .. } | DriverError::Render { moon, .. } => moon,
        }
    }
}
