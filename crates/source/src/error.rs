use almanac_types::DateError;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for loading annotation sources.
#[derive(Error, Debug)]
pub enum AnnotationError {
    #[error("Malformed record on line {line}: '{record}': {source}")]
    MalformedRecord {
        line: usize,
        record: String,
        #[source]
        source: DateError,
    },

    #[error("Failed to open annotation source '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error while reading annotations: {0}")]
    Io(#[from] std::io::Error),
}
