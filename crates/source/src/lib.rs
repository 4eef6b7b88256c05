//! Date annotations for the calendar pipeline.
//!
//! This crate provides [`AnnotationStore`], the read-only lookup table that maps
//! calendar dates to the label lines printed inside day cells.
//!
//! ## Source Format
//!
//! One record per line, `YYYY.MM.DD,Label`:
//!
//! ```text
//! 2026.01.01,New Year's Day
//! "2026.07.04,Independence Day\nObserved",
//! ```
//!
//! Quote characters and trailing commas are stripped. The two-character
//! sequence `\n` inside a label splits it into stacked lines.
//!
//! ## Example
//!
//! ```
//! use almanac_source::AnnotationStore;
//! use almanac_types::CalendarDate;
//!
//! let store = AnnotationStore::parse_str("2026.01.01,New Year's Day").unwrap();
//! let date = CalendarDate::new(2026, 1, 1).unwrap();
//! assert_eq!(store.get(&date), Some(&["New Year's Day".to_string()][..]));
//! ```

mod annotations;
mod error;

pub use annotations::{AnnotationStore, LINE_BREAK_MARKER};
pub use error::AnnotationError;
