use crate::LayoutError;
use almanac_types::{Color, Size};

/// Points per inch.
pub const DPI: f32 = 72.0;

/// How a box's anchor point relates to the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// The anchor is the lower-left corner.
    Corner,
    /// The anchor is the box center.
    Center,
}

/// Which side of the cell the day number hugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
}

/// The fixed physical page and the space reserved outside the day grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    /// Horizontal space not given to the seven columns.
    pub margin_columns: f32,
    /// Vertical space not given to the week rows (title band and header).
    pub margin_rows: f32,
}

impl PageGeometry {
    /// 11.25in x 11.25in with one inch of column margin and three inches of row margin.
    pub const fn square() -> Self {
        Self {
            width: 11.25 * DPI,
            height: 11.25 * DPI,
            margin_columns: DPI,
            margin_rows: 3.0 * DPI,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::square()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub weekday_fill: Color,
    pub weekend_fill: Color,
    pub cell_stroke: Color,
    pub header_fill: Color,
    pub header_text: Color,
    pub text: Color,
    pub title: Color,
    pub mini_month: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::rgb(227, 248, 240),
            weekday_fill: Color::WHITE,
            weekend_fill: Color::LIGHT_GRAY,
            cell_stroke: Color::GRAY,
            header_fill: Color::DARK_GRAY,
            header_text: Color::WHITE,
            text: Color::BLACK,
            title: Color::BLACK,
            mini_month: Color::DARK_GRAY,
        }
    }
}

/// Where the seven columns and the first row start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    /// Left edge of column 0. `None` indents by half a cell width.
    pub left: Option<f32>,
    /// Distance from the page top to the top of row 0, in cell heights.
    /// Used when the weekday header is hidden.
    pub top_in_cells: f32,
    /// Gap between the weekday header and row 0.
    pub header_gap: f32,
    /// Painted box size relative to its slot.
    pub box_scale: f32,
    pub corner_radius: f32,
    pub stroke_width: f32,
}

/// Font sizes and offsets of every text run on the page, in points.
///
/// Cell-relative offsets are measured from the cell slot, not the painted box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub title_size: f32,
    /// Distance from the page top to the title baseline.
    pub title_baseline: f32,
    pub day_number_size: f32,
    pub day_number_edge: Edge,
    /// Horizontal distance from `day_number_edge` to the day number's center.
    pub day_number_inset_x: f32,
    /// Distance from the slot top to the day number baseline.
    pub day_number_inset_y: f32,
    pub annotation_size: f32,
    /// Distance from the slot bottom to the last annotation line's baseline.
    pub annotation_baseline: f32,
    /// Vertical step between stacked annotation lines.
    pub line_step: f32,
    pub header_size: f32,
}

/// Placement of the weekday header bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderMetrics {
    /// Distance from the page top to the top of the bar.
    pub top: f32,
    /// Bar height as a fraction of the six-week cell height.
    pub height_in_cells: f32,
}

/// Placement of the previous/next mini-month grids.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiniMonthMetrics {
    /// Distance from the page top to the top of both grids.
    pub top: f32,
    /// Distance from the left page edge to the previous month, and from the
    /// right page edge to the next month.
    pub side_inset: f32,
    pub column_width: f32,
    pub row_height: f32,
    pub title_size: f32,
    pub text_size: f32,
}

impl MiniMonthMetrics {
    pub fn width(&self) -> f32 {
        self.column_width * 7.0
    }
}

/// Every tunable of [`crate::MonthGridLayout`].
///
/// The two calendar variants are presets of this one struct.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub show_background: bool,
    pub anchor: Anchor,
    /// Give five-week months taller cells (divisor 6.5 instead of 7.0).
    /// When off the divisor is always 6.
    pub week_count_adjustment: bool,
    pub show_mini_months: bool,
    pub show_weekday_header: bool,
    pub geometry: PageGeometry,
    pub palette: Palette,
    pub grid: GridMetrics,
    pub text: TextMetrics,
    pub header: HeaderMetrics,
    pub mini: MiniMonthMetrics,
}

impl LayoutConfig {
    /// Tinted background, corner-anchored boxes and a fixed six-row grid.
    pub fn basic() -> Self {
        Self {
            show_background: true,
            anchor: Anchor::Corner,
            week_count_adjustment: false,
            show_mini_months: false,
            show_weekday_header: false,
            geometry: PageGeometry::square(),
            palette: Palette::default(),
            grid: GridMetrics {
                left: None,
                top_in_cells: 1.75,
                header_gap: 6.0,
                box_scale: 0.95,
                corner_radius: 12.0,
                stroke_width: 1.0,
            },
            text: TextMetrics {
                title_size: 54.0,
                title_baseline: 1.5 * DPI,
                day_number_size: 18.0,
                day_number_edge: Edge::Left,
                day_number_inset_x: 20.0,
                day_number_inset_y: 30.0,
                annotation_size: 10.0,
                annotation_baseline: 10.0,
                line_step: 15.0,
                header_size: 14.0,
            },
            header: HeaderMetrics {
                top: 1.75 * DPI,
                height_in_cells: 0.4,
            },
            mini: MiniMonthMetrics {
                top: 20.0,
                side_inset: 0.5 * DPI,
                column_width: 14.0,
                row_height: 10.0,
                title_size: 9.0,
                text_size: 7.0,
            },
        }
    }

    /// Center-anchored boxes under a weekday header, week-count aware rows and
    /// mini-months of the neighbouring months.
    pub fn advanced() -> Self {
        let basic = Self::basic();
        Self {
            show_background: false,
            anchor: Anchor::Center,
            week_count_adjustment: true,
            show_mini_months: true,
            show_weekday_header: true,
            grid: GridMetrics {
                left: Some(0.5 * DPI),
                ..basic.grid
            },
            text: TextMetrics {
                title_baseline: 1.25 * DPI,
                day_number_edge: Edge::Right,
                day_number_inset_x: 22.0,
                day_number_inset_y: 28.0,
                ..basic.text
            },
            ..basic
        }
    }

    /// Rejects geometry that leaves no room for the grid.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let g = &self.geometry;
        if !(g.width > 0.0 && g.height > 0.0) {
            return Err(LayoutError::InvalidConfig(format!(
                "page size must be positive, got {}x{}",
                g.width, g.height
            )));
        }
        if g.margin_columns < 0.0 || g.margin_columns >= g.width {
            return Err(LayoutError::InvalidConfig(format!(
                "column margin {} does not fit a page {} wide",
                g.margin_columns, g.width
            )));
        }
        if g.margin_rows < 0.0 || g.margin_rows >= g.height {
            return Err(LayoutError::InvalidConfig(format!(
                "row margin {} does not fit a page {} high",
                g.margin_rows, g.height
            )));
        }
        if !(self.grid.box_scale > 0.0 && self.grid.box_scale <= 1.0) {
            return Err(LayoutError::InvalidConfig(format!(
                "box scale must be in (0, 1], got {}",
                self.grid.box_scale
            )));
        }
        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::advanced()
    }
}
