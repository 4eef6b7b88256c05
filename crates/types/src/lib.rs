pub mod color;
pub mod date;
pub mod geometry;
pub mod units;

pub use color::Color;
pub use date::{CalendarDate, DateError, YearMonth, days_in_month, is_leap_year};
pub use geometry::{Point, Rect, Size};
pub use units::{FontUnits, font_units_to_points};
