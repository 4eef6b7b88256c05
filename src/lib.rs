//! Printable month calendars.
//!
//! The root crate wires the workspace together: annotations from
//! `almanac-source`, page layout from `almanac-layout` and PDF output from
//! `almanac-render-lopdf`. See [`CalendarBuilder`] for the entry point.

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::{AppConfig, FontSource, LayoutOverrides, PaletteOverrides, Variant};
pub use error::CalendarError;
pub use pipeline::{CalendarBuilder, CalendarDocument};

// Re-export the types callers need to drive a pipeline directly.
pub use almanac_layout::{FontLibrary, LayoutConfig, PageCanvas};
pub use almanac_source::AnnotationStore;
pub use almanac_types::{CalendarDate, YearMonth};
