use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while generating or loading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The output file's parent directory was missing and could not be created.
    #[error("could not create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The flow and element columns were not the same length.
    #[error("column length mismatch: {flow} flow ids vs {element} element ids")]
    LengthMismatch { flow: usize, element: usize },

    #[error("invalid generator config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, DatasetError>;
