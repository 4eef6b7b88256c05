//! The month page layout.
//!
//! Page space is y-up. For each day the slot rectangle is
//! `(left + column * w, top - (row + 1) * h, w, h)`, where `top` is either a
//! fixed number of cell heights below the page top or just under the weekday
//! header. The painted box is the slot scaled by `box_scale`, anchored at the
//! slot's lower-left corner or at its center depending on [`Anchor`].

use crate::config::{Anchor, Edge, LayoutConfig};
use crate::elements::{DrawOp, PageCanvas};
use crate::fonts::FontLibrary;
use crate::grid::{DayPositions, GridCell};
use crate::mini::MiniMonth;
use crate::painting::{BoxStyle, CenteredTextPainter, RoundedBoxPainter};
use crate::LayoutError;
use almanac_source::AnnotationStore;
use almanac_traits::FontRole;
use almanac_types::{Color, Point, Rect, Size, YearMonth};

const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Fraction of the font size between a label's baseline and its visual middle.
const LABEL_MIDLINE: f32 = 0.35;

/// Lays out one month per call. Holds no per-month state.
#[derive(Debug, Clone)]
pub struct MonthGridLayout<'a> {
    config: LayoutConfig,
    fonts: &'a FontLibrary,
}

impl<'a> MonthGridLayout<'a> {
    pub fn new(config: LayoutConfig, fonts: &'a FontLibrary) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self { config, fonts })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Row divisor for a month spanning `weeks` weeks.
    pub fn row_divisor(&self, weeks: u32) -> f32 {
        match (self.config.week_count_adjustment, weeks) {
            (false, _) => 6.0,
            (true, 6) => 7.0,
            (true, _) => 6.5,
        }
    }

    /// Slot size for the given month.
    pub fn cell_size(&self, month: YearMonth) -> Size {
        let g = &self.config.geometry;
        Size::new(
            (g.width - g.margin_columns) / 7.0,
            (g.height - g.margin_rows) / self.row_divisor(month.weeks_in_month()),
        )
    }

    /// Cell height of a six-week month; the header bar is sized from it.
    fn six_week_cell_height(&self) -> f32 {
        let g = &self.config.geometry;
        (g.height - g.margin_rows) / self.row_divisor(6)
    }

    /// The full span of the weekday header bar.
    pub fn header_rect(&self) -> Rect {
        let g = &self.config.geometry;
        let cell_width = (g.width - g.margin_columns) / 7.0;
        let height = self.config.header.height_in_cells * self.six_week_cell_height();
        let top = g.height - self.config.header.top;
        Rect::new(self.grid_left(cell_width), top - height, 7.0 * cell_width, height)
    }

    fn grid_left(&self, cell_width: f32) -> f32 {
        self.config.grid.left.unwrap_or(cell_width / 2.0)
    }

    fn grid_top(&self, cell_height: f32) -> f32 {
        if self.config.show_weekday_header {
            self.header_rect().bottom() - self.config.grid.header_gap
        } else {
            self.config.geometry.height - self.config.grid.top_in_cells * cell_height
        }
    }

    /// Every day of `month` with its slot and annotation lines.
    pub fn cells<'s>(&self, month: YearMonth, annotations: &'s AnnotationStore) -> Vec<GridCell<'s>> {
        let cell = self.cell_size(month);
        let left = self.grid_left(cell.width);
        let top = self.grid_top(cell.height);

        DayPositions::new(month)
            .filter_map(|(day, column, row)| {
                let date = month.date(day)?;
                let slot = Rect::new(
                    left + column as f32 * cell.width,
                    top - (row + 1) as f32 * cell.height,
                    cell.width,
                    cell.height,
                );
                Some(GridCell {
                    date,
                    column,
                    row,
                    slot,
                    annotation: annotations.get(&date),
                })
            })
            .collect()
    }

    fn box_anchor(&self, slot: &Rect) -> Point {
        match self.config.anchor {
            Anchor::Corner => slot.lower_left(),
            Anchor::Center => slot.center(),
        }
    }

    fn box_style(&self, fill: Color) -> BoxStyle {
        BoxStyle {
            corner_radius: self.config.grid.corner_radius,
            fill,
            stroke: self.config.palette.cell_stroke,
            stroke_width: self.config.grid.stroke_width,
        }
    }

    /// Lays out `month` into a fresh page.
    pub fn render(&self, month: YearMonth, annotations: &AnnotationStore) -> PageCanvas {
        let config = &self.config;
        let mut canvas = PageCanvas::new(config.geometry.size());
        let painter = CenteredTextPainter::new(self.fonts);

        if config.show_background {
            canvas.push(DrawOp::FillRect {
                rect: Rect::from_size(config.geometry.size()),
                color: config.palette.background,
            });
        }

        let cells = self.cells(month, annotations);
        log::debug!(
            "Laying out {}: {} days over {} weeks",
            month,
            cells.len(),
            month.weeks_in_month()
        );
        for cell in &cells {
            self.paint_cell(&mut canvas, &painter, cell);
        }

        if config.show_weekday_header {
            self.paint_header(&mut canvas, &painter);
        }

        let title_anchor = Point::new(
            config.geometry.width / 2.0,
            config.geometry.height - config.text.title_baseline,
        );
        painter.paint(
            &mut canvas,
            FontRole::Display,
            config.text.title_size,
            title_anchor,
            month.name(),
            config.palette.title,
        );

        if config.show_mini_months {
            self.paint_mini_months(&mut canvas, &painter, month);
        }

        canvas
    }

    fn paint_cell(&self, canvas: &mut PageCanvas, painter: &CenteredTextPainter<'_>, cell: &GridCell<'_>) {
        let config = &self.config;
        let fill = if cell.is_weekend() {
            config.palette.weekend_fill
        } else {
            config.palette.weekday_fill
        };
        RoundedBoxPainter::paint(
            canvas,
            self.box_anchor(&cell.slot),
            config.anchor,
            cell.slot.width * config.grid.box_scale,
            cell.slot.height * config.grid.box_scale,
            &self.box_style(fill),
        );

        let text = &config.text;
        let number_x = match text.day_number_edge {
            Edge::Left => cell.slot.left() + text.day_number_inset_x,
            Edge::Right => cell.slot.right() - text.day_number_inset_x,
        };
        painter.paint(
            canvas,
            FontRole::Body,
            text.day_number_size,
            Point::new(number_x, cell.slot.top() - text.day_number_inset_y),
            &cell.date.day().to_string(),
            config.palette.text,
        );

        if let Some(lines) = cell.annotation {
            let baseline = Point::new(
                cell.slot.center().x,
                cell.slot.bottom() + text.annotation_baseline,
            );
            painter.paint_stacked(
                canvas,
                FontRole::Body,
                text.annotation_size,
                baseline,
                lines,
                text.line_step,
                config.palette.text,
            );
        }
    }

    fn paint_header(&self, canvas: &mut PageCanvas, painter: &CenteredTextPainter<'_>) {
        let config = &self.config;
        let bar = self.header_rect();
        let column_width = bar.width / 7.0;
        let style = self.box_style(config.palette.header_fill);

        for (column, label) in WEEKDAY_LABELS.iter().enumerate() {
            let slot = Rect::new(
                bar.left() + column as f32 * column_width,
                bar.bottom(),
                column_width,
                bar.height,
            );
            let painted = RoundedBoxPainter::paint(
                canvas,
                self.box_anchor(&slot),
                config.anchor,
                column_width * config.grid.box_scale,
                bar.height,
                &style,
            );
            let center = painted.center();
            painter.paint(
                canvas,
                FontRole::Body,
                config.text.header_size,
                center.offset(0.0, -LABEL_MIDLINE * config.text.header_size),
                label,
                config.palette.header_text,
            );
        }
    }

    fn paint_mini_months(&self, canvas: &mut PageCanvas, painter: &CenteredTextPainter<'_>, month: YearMonth) {
        let config = &self.config;
        let metrics = &config.mini;
        let top = config.geometry.height - metrics.top;
        let placements = [
            (month.previous(), metrics.side_inset),
            (
                month.next(),
                config.geometry.width - metrics.side_inset - metrics.width(),
            ),
        ];
        for (neighbour, left) in placements {
            match neighbour {
                Some(neighbour) => MiniMonth::new(neighbour, left, top).paint(
                    canvas,
                    painter,
                    metrics,
                    config.palette.mini_month,
                ),
                None => log::warn!("No neighbouring month of {} in the supported range", month),
            }
        }
    }
}
