//! Calendar generation pipeline.
//!
//! - [`CalendarBuilder`]: fluent builder that loads annotations and fonts
//! - [`CalendarDocument`]: lays out the twelve months and commits the PDF
//!
//! # Example
//!
//! ```no_run
//! use almanac::{CalendarBuilder, Variant};
//!
//! let calendar = CalendarBuilder::new(2026)
//!     .with_annotations_file("dates.csv")?
//!     .with_layout(Variant::Basic.layout_config())
//!     .build()?;
//!
//! calendar.write_to_file("calendar.pdf")?;
//! # Ok::<(), almanac::CalendarError>(())
//! ```

mod builder;
mod document;

pub use builder::CalendarBuilder;
pub use document::CalendarDocument;
