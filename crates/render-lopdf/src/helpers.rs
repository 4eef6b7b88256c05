use almanac_layout::encoding::win_ansi_byte;
use almanac_layout::{Color, DrawOp, PageCanvas, PathSegment, TextRun};
use almanac_render_core::RenderError;
use almanac_render_core::utils::font_resource_name;
use almanac_traits::FontRole;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

/// Encodes text for a WinAnsiEncoding font; unmappable characters become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|ch| {
            win_ansi_byte(ch).unwrap_or_else(|| {
                log::warn!("Character {:?} has no WinAnsi code, writing '?'", ch);
                b'?'
            })
        })
        .collect()
}

/// Converts one page's draw operations into a content stream.
pub fn canvas_to_content(canvas: &PageCanvas) -> Result<Content, RenderError> {
    let mut ctx = PageContext::new();
    for op in canvas.ops() {
        ctx.draw(op)?;
    }
    Ok(ctx.finish())
}

fn color_operands(color: &Color) -> Vec<Object> {
    color.components().into_iter().map(Object::from).collect()
}

// --- Internal Page Drawing Context ---

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font: Option<(FontRole, f32)>,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

/// Emits operators while skipping redundant graphics-state changes.
struct PageContext {
    content: Content,
    state: PageRenderState,
}

impl PageContext {
    fn new() -> Self {
        Self {
            content: Content { operations: vec![] },
            state: Default::default(),
        }
    }

    fn finish(self) -> Content {
        self.content
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn draw(&mut self, op: &DrawOp) -> Result<(), RenderError> {
        match op {
            DrawOp::FillRect { rect, color } => {
                self.set_fill_color(color);
                self.op(
                    "re",
                    vec![rect.x.into(), rect.y.into(), rect.width.into(), rect.height.into()],
                );
                self.op("f", vec![]);
            }
            DrawOp::Path {
                segments,
                fill,
                stroke,
                stroke_width,
            } => self.draw_path(segments, fill.as_ref(), stroke.as_ref(), *stroke_width),
            DrawOp::Text(run) => self.draw_text(run),
        }
        Ok(())
    }

    fn set_fill_color(&mut self, color: &Color) {
        if self.state.fill_color.as_ref() != Some(color) {
            self.op("rg", color_operands(color));
            self.state.fill_color = Some(*color);
        }
    }

    fn set_stroke(&mut self, color: &Color, width: f32) {
        if self.state.stroke_color.as_ref() != Some(color) {
            self.op("RG", color_operands(color));
            self.state.stroke_color = Some(*color);
        }
        if self.state.line_width != Some(width) {
            self.op("w", vec![width.into()]);
            self.state.line_width = Some(width);
        }
    }

    fn set_font(&mut self, role: FontRole, size: f32) {
        if self.state.font != Some((role, size)) {
            self.op(
                "Tf",
                vec![
                    Object::Name(font_resource_name(role).as_bytes().to_vec()),
                    size.into(),
                ],
            );
            self.state.font = Some((role, size));
        }
    }

    fn draw_path(
        &mut self,
        segments: &[PathSegment],
        fill: Option<&Color>,
        stroke: Option<&Color>,
        stroke_width: f32,
    ) {
        if let Some(color) = fill {
            self.set_fill_color(color);
        }
        if let Some(color) = stroke {
            self.set_stroke(color, stroke_width);
        }
        for segment in segments {
            match *segment {
                PathSegment::MoveTo(p) => self.op("m", vec![p.x.into(), p.y.into()]),
                PathSegment::LineTo(p) => self.op("l", vec![p.x.into(), p.y.into()]),
                PathSegment::CurveTo(c1, c2, end) => self.op(
                    "c",
                    vec![
                        c1.x.into(),
                        c1.y.into(),
                        c2.x.into(),
                        c2.y.into(),
                        end.x.into(),
                        end.y.into(),
                    ],
                ),
                PathSegment::Close => self.op("h", vec![]),
            }
        }
        let paint = match (fill.is_some(), stroke.is_some()) {
            (true, true) => "B",
            (true, false) => "f",
            (false, true) => "S",
            (false, false) => "n",
        };
        self.op(paint, vec![]);
    }

    fn draw_text(&mut self, run: &TextRun) {
        if run.text.trim().is_empty() {
            return;
        }
        self.op("BT", vec![]);
        self.set_font(run.font, run.size);
        self.set_fill_color(&run.color);
        self.op("Td", vec![run.origin.x.into(), run.origin.y.into()]);
        self.op(
            "Tj",
            vec![Object::String(to_win_ansi(&run.text), StringFormat::Literal)],
        );
        self.op("ET", vec![]);
    }
}
