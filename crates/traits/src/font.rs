//! FontMetrics trait for abstracting glyph measurement.
//!
//! The layout engine only needs advance widths to center text, so a font is
//! anything that can report its PostScript name and per-character advances.
//! Built-in Standard-14 faces and parsed TrueType files both implement it.

use almanac_types::FontUnits;
use std::fmt::Debug;
use thiserror::Error;

/// Error type for font loading operations.
#[derive(Error, Debug, Clone)]
pub enum FontError {
    #[error("Unknown built-in font: {0}")]
    UnknownBuiltin(String),

    #[error("Failed to parse font '{name}': {message}")]
    ParseFailed { name: String, message: String },
}

/// The two typographic roles a calendar page uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontRole {
    /// Day numbers, weekday labels, annotations and mini-months.
    Body,
    /// The month title.
    Display,
}

impl FontRole {
    pub const ALL: [FontRole; 2] = [FontRole::Body, FontRole::Display];
}

/// A trait for measuring text set in a particular font.
///
/// Widths are reported in [`FontUnits`] (1/1000 em) so callers convert to page
/// points explicitly with [`almanac_types::font_units_to_points`].
pub trait FontMetrics: Send + Sync + Debug {
    /// The PostScript name written as the PDF `BaseFont`.
    fn postscript_name(&self) -> &str;

    /// Advance width of a single character.
    ///
    /// Characters the font cannot map report the font's fallback width.
    fn char_width(&self, ch: char) -> FontUnits;

    /// Advance width of a whole run, without kerning.
    fn string_width(&self, text: &str) -> FontUnits {
        text.chars().map(|ch| self.char_width(ch)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Monospace;

    impl FontMetrics for Monospace {
        fn postscript_name(&self) -> &str {
            "Courier"
        }

        fn char_width(&self, _ch: char) -> FontUnits {
            FontUnits(600.0)
        }
    }

    #[test]
    fn string_width_sums_char_widths() {
        assert_eq!(Monospace.string_width("May"), FontUnits(1800.0));
        assert_eq!(Monospace.string_width(""), FontUnits::ZERO);
    }
}
