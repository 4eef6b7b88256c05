//! Calendar page layout.
//!
//! [`MonthGridLayout`] turns a month and an [`almanac_source::AnnotationStore`]
//! into a [`PageCanvas`] of drawing instructions. Nothing here touches the
//! output format; the renderer crates consume the canvas.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),
}

pub mod config;
pub mod elements;
pub mod encoding;
pub mod fonts;
pub mod grid;
pub mod mini;
pub mod month;
pub mod painting;

pub use self::config::{Anchor, Edge, LayoutConfig, PageGeometry, Palette};
pub use self::elements::{DrawOp, PageCanvas, PathSegment, TextRun};
pub use self::fonts::{DescriptorMetrics, FontFace, FontLibrary, StandardFont, TrueTypeFace};
pub use self::grid::{DayPositions, GridCell};
pub use self::mini::MiniMonth;
pub use self::month::MonthGridLayout;
pub use self::painting::{BoxStyle, CenteredTextPainter, RoundedBoxPainter};

// Re-export the shared foundation types so callers need one import path.
pub use almanac_traits::{FontMetrics, FontRole};
pub use almanac_types::{Color, Point, Rect, Size};
