use almanac_layout::LayoutError;
use almanac_render_core::RenderError;
use almanac_source::AnnotationError;
use almanac_traits::FontError;
use almanac_types::DateError;
use std::path::PathBuf;
use thiserror::Error;

/// A comprehensive error type for calendar generation.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Malformed annotation on line {line}: '{record}'")]
    MalformedRecord {
        line: usize,
        record: String,
        #[source]
        source: DateError,
    },

    #[error("Cannot open '{}': {source}", path.display())]
    MissingResource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Font error: {0}")]
    Font(#[from] FontError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<AnnotationError> for CalendarError {
    fn from(err: AnnotationError) -> Self {
        match err {
            AnnotationError::MalformedRecord {
                line,
                record,
                source,
            } => CalendarError::MalformedRecord {
                line,
                record,
                source,
            },
            AnnotationError::Open { path, source } => CalendarError::MissingResource { path, source },
            AnnotationError::Io(e) => CalendarError::Io(e),
        }
    }
}

impl From<LayoutError> for CalendarError {
    fn from(err: LayoutError) -> Self {
        CalendarError::Config(err.to_string())
    }
}

impl From<DateError> for CalendarError {
    fn from(err: DateError) -> Self {
        CalendarError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CalendarError {
    fn from(err: serde_json::Error) -> Self {
        CalendarError::Config(err.to_string())
    }
}
