use crate::config::Anchor;
use crate::elements::{DrawOp, PageCanvas, PathSegment};
use almanac_types::{Color, Point, Rect};

/// Control-point distance of a cubic quarter-circle, as a fraction of the radius.
pub const KAPPA: f32 = 0.5523;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStyle {
    pub corner_radius: f32,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f32,
}

/// Emits filled and stroked rounded rectangles.
///
/// Stateless; dimensions are not validated, so a radius larger than half a
/// side produces a self-intersecting outline.
pub struct RoundedBoxPainter;

impl RoundedBoxPainter {
    /// Resolves the box rectangle for an anchor point under `anchor`.
    pub fn resolve(anchor_point: Point, anchor: Anchor, width: f32, height: f32) -> Rect {
        match anchor {
            Anchor::Corner => Rect::new(anchor_point.x, anchor_point.y, width, height),
            Anchor::Center => Rect::new(
                anchor_point.x - width / 2.0,
                anchor_point.y - height / 2.0,
                width,
                height,
            ),
        }
    }

    /// Paints the box and returns the rectangle it occupies.
    pub fn paint(
        canvas: &mut PageCanvas,
        anchor_point: Point,
        anchor: Anchor,
        width: f32,
        height: f32,
        style: &BoxStyle,
    ) -> Rect {
        let rect = Self::resolve(anchor_point, anchor, width, height);
        canvas.push(DrawOp::Path {
            segments: Self::outline(rect, style.corner_radius),
            fill: Some(style.fill),
            stroke: Some(style.stroke),
            stroke_width: style.stroke_width,
        });
        rect
    }

    /// The closed outline: four inset edges joined by four Bézier corners,
    /// counter-clockwise from the bottom edge.
    pub fn outline(rect: Rect, radius: f32) -> Vec<PathSegment> {
        let (x0, y0, x1, y1) = (rect.left(), rect.bottom(), rect.right(), rect.top());
        let r = radius;
        let k = KAPPA * r;
        let p = Point::new;

        vec![
            PathSegment::MoveTo(p(x0 + r, y0)),
            // bottom edge, lower-right corner
            PathSegment::LineTo(p(x1 - r, y0)),
            PathSegment::CurveTo(p(x1 - r + k, y0), p(x1, y0 + r - k), p(x1, y0 + r)),
            // right edge, upper-right corner
            PathSegment::LineTo(p(x1, y1 - r)),
            PathSegment::CurveTo(p(x1, y1 - r + k), p(x1 - r + k, y1), p(x1 - r, y1)),
            // top edge, upper-left corner
            PathSegment::LineTo(p(x0 + r, y1)),
            PathSegment::CurveTo(p(x0 + r - k, y1), p(x0, y1 - r + k), p(x0, y1 - r)),
            // left edge, lower-left corner
            PathSegment::LineTo(p(x0, y0 + r)),
            PathSegment::CurveTo(p(x0, y0 + r - k), p(x0 + r - k, y0), p(x0 + r, y0)),
            PathSegment::Close,
        ]
    }
}
