use crate::elements::{DrawOp, PageCanvas, TextRun};
use crate::fonts::FontLibrary;
use almanac_traits::{FontMetrics, FontRole};
use almanac_types::{Color, Point, font_units_to_points};

/// Emits single-line text runs centered horizontally on an anchor.
#[derive(Debug, Clone, Copy)]
pub struct CenteredTextPainter<'a> {
    fonts: &'a FontLibrary,
}

impl<'a> CenteredTextPainter<'a> {
    pub fn new(fonts: &'a FontLibrary) -> Self {
        Self { fonts }
    }

    /// Advance width of `text` in points.
    pub fn measure(&self, role: FontRole, size: f32, text: &str) -> f32 {
        font_units_to_points(self.fonts.face(role).string_width(text), size)
    }

    /// Paints `text` with its baseline on `anchor.y`, centered on `anchor.x`.
    pub fn paint(
        &self,
        canvas: &mut PageCanvas,
        role: FontRole,
        size: f32,
        anchor: Point,
        text: &str,
        color: Color,
    ) {
        if text.is_empty() {
            return;
        }
        let width = self.measure(role, size, text);
        canvas.push(DrawOp::Text(TextRun {
            font: role,
            size,
            origin: Point::new(anchor.x - width / 2.0, anchor.y),
            text: text.to_string(),
            color,
        }));
    }

    /// Paints lines stacked upward from `anchor`.
    ///
    /// The last line sits on the anchor baseline and each earlier line is
    /// `step` higher, so the first line reads on top. Lines are emitted last
    /// to first.
    #[allow(clippy::too_many_arguments)]
    pub fn paint_stacked(
        &self,
        canvas: &mut PageCanvas,
        role: FontRole,
        size: f32,
        anchor: Point,
        lines: &[String],
        step: f32,
        color: Color,
    ) {
        for (level, line) in lines.iter().rev().enumerate() {
            let baseline = anchor.offset(0.0, level as f32 * step);
            self.paint(canvas, role, size, baseline, line, color);
        }
    }
}
