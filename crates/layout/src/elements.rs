//! The drawing-instruction model handed from layout to rendering.
//!
//! Coordinates are page points with the origin at the lower-left corner.

use almanac_traits::FontRole;
use almanac_types::{Color, Point, Rect, Size};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    /// Cubic Bézier: two control points, then the end point.
    CurveTo(Point, Point, Point),
    Close,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub font: FontRole,
    pub size: f32,
    /// Start of the baseline.
    pub origin: Point,
    pub text: String,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: Color,
    },
    Path {
        segments: Vec<PathSegment>,
        fill: Option<Color>,
        stroke: Option<Color>,
        stroke_width: f32,
    },
    Text(TextRun),
}

/// One page's drawing instructions, in painting order.
#[derive(Debug, Clone, PartialEq)]
pub struct PageCanvas {
    size: Size,
    ops: Vec<DrawOp>,
}

impl PageCanvas {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Text runs in painting order.
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(run) => Some(run),
            _ => None,
        })
    }

    /// Number of path operations (boxes) on the page.
    pub fn path_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Path { .. }))
            .count()
    }
}
