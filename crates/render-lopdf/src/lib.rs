//! PDF renderer for calendar pages.
//!
//! This crate assembles a multi-page PDF in memory with the lopdf library:
//! one page per [`almanac_layout::PageCanvas`], sharing one font resource
//! dictionary.

mod helpers;
mod renderer;

pub use helpers::{canvas_to_content, to_win_ansi};
pub use renderer::LopdfRenderer;
