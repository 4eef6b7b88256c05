//! Font design units.
//!
//! Glyph metrics are expressed in thousandths of an em, independent of the
//! font size. Page geometry is plain `f32` points; the two only meet through
//! [`font_units_to_points`].

use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A horizontal or vertical extent in 1/1000 em.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct FontUnits(pub f32);

impl FontUnits {
    pub const ZERO: FontUnits = FontUnits(0.0);

    /// Rescales a raw value from a font whose em square has `units_per_em` units.
    pub fn from_design(value: f32, units_per_em: u16) -> Self {
        if units_per_em == 0 {
            return FontUnits(value);
        }
        FontUnits(value * 1000.0 / units_per_em as f32)
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

impl Add for FontUnits {
    type Output = FontUnits;

    fn add(self, rhs: FontUnits) -> FontUnits {
        FontUnits(self.0 + rhs.0)
    }
}

impl AddAssign for FontUnits {
    fn add_assign(&mut self, rhs: FontUnits) {
        self.0 += rhs.0;
    }
}

impl Sum for FontUnits {
    fn sum<I: Iterator<Item = FontUnits>>(iter: I) -> FontUnits {
        iter.fold(FontUnits::ZERO, Add::add)
    }
}

/// Converts a font-unit extent to page points at the given font size.
pub fn font_units_to_points(width: FontUnits, size: f32) -> f32 {
    width.0 / 1000.0 * size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_at_font_size() {
        assert!((font_units_to_points(FontUnits(556.0), 18.0) - 10.008).abs() < 1e-4);
        assert_eq!(font_units_to_points(FontUnits(1000.0), 12.0), 12.0);
    }

    #[test]
    fn rescales_truetype_em() {
        assert_eq!(FontUnits::from_design(1024.0, 2048), FontUnits(500.0));
    }

    #[test]
    fn sums() {
        let total: FontUnits = [FontUnits(278.0), FontUnits(722.0)].into_iter().sum();
        assert_eq!(total, FontUnits(1000.0));
    }
}
