//! Box-free reference grids of the neighbouring months.

use crate::config::MiniMonthMetrics;
use crate::elements::PageCanvas;
use crate::grid::DayPositions;
use crate::painting::CenteredTextPainter;
use almanac_traits::FontRole;
use almanac_types::{Color, Point, YearMonth};

const WEEKDAY_LETTERS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// A miniature month: a title row, a weekday-letter row, then day numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiniMonth {
    pub month: YearMonth,
    /// Left edge of the grid.
    pub left: f32,
    /// Top edge of the title row.
    pub top: f32,
}

impl MiniMonth {
    pub fn new(month: YearMonth, left: f32, top: f32) -> Self {
        Self { month, left, top }
    }

    /// Center x of a column.
    pub fn column_center(&self, metrics: &MiniMonthMetrics, column: u32) -> f32 {
        self.left + (column as f32 + 0.5) * metrics.column_width
    }

    /// Baseline of a row; row 0 is the title, row 1 the weekday letters.
    pub fn row_baseline(&self, metrics: &MiniMonthMetrics, row: u32) -> f32 {
        self.top - (row as f32 + 1.0) * metrics.row_height
    }

    pub fn paint(
        &self,
        canvas: &mut PageCanvas,
        painter: &CenteredTextPainter<'_>,
        metrics: &MiniMonthMetrics,
        color: Color,
    ) {
        let title_anchor = Point::new(self.left + metrics.width() / 2.0, self.row_baseline(metrics, 0));
        painter.paint(
            canvas,
            FontRole::Body,
            metrics.title_size,
            title_anchor,
            &self.month.to_string(),
            color,
        );

        for (column, letter) in (0u32..).zip(WEEKDAY_LETTERS) {
            let anchor = Point::new(self.column_center(metrics, column), self.row_baseline(metrics, 1));
            painter.paint(canvas, FontRole::Body, metrics.text_size, anchor, letter, color);
        }

        for (day, column, row) in DayPositions::new(self.month) {
            let anchor = Point::new(
                self.column_center(metrics, column),
                self.row_baseline(metrics, row + 2),
            );
            painter.paint(
                canvas,
                FontRole::Body,
                metrics.text_size,
                anchor,
                &day.to_string(),
                color,
            );
        }
    }
}
