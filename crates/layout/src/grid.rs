use almanac_types::{CalendarDate, Rect, YearMonth};

/// Column and row of every day of a month in a Sunday-first grid.
///
/// The column starts one before the weekday of the 1st and advances once per
/// day. Wrapping past Saturday starts a new row, except on the 1st itself.
#[derive(Debug, Clone)]
pub struct DayPositions {
    day: u32,
    last_day: u32,
    column: u32,
    row: u32,
}

impl DayPositions {
    pub fn new(month: YearMonth) -> Self {
        Self {
            day: 0,
            last_day: month.days_in_month(),
            column: (month.first_weekday() + 6) % 7,
            row: 0,
        }
    }
}

impl Iterator for DayPositions {
    /// `(day, column, row)`
    type Item = (u32, u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.day >= self.last_day {
            return None;
        }
        self.day += 1;
        self.column += 1;
        if self.column >= 7 {
            self.column = 0;
            if self.day > 1 {
                self.row += 1;
            }
        }
        Some((self.day, self.column, self.row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.last_day - self.day) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DayPositions {}

/// One day's place on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell<'a> {
    pub date: CalendarDate,
    pub column: u32,
    pub row: u32,
    /// The full slot; the painted box is scaled down inside it.
    pub slot: Rect,
    pub annotation: Option<&'a [String]>,
}

impl GridCell<'_> {
    /// Sunday and Saturday columns.
    pub fn is_weekend(&self) -> bool {
        self.column == 0 || self.column == 6
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(year: i32, month: u32) -> Vec<(u32, u32, u32)> {
        DayPositions::new(YearMonth::new(year, month).unwrap()).collect()
    }

    #[test]
    fn test_january_2026() {
        let days = positions(2026, 1);
        assert_eq!(days.len(), 31);
        assert_eq!(days[0], (1, 4, 0));
        assert_eq!(days[3], (4, 0, 1));
        assert_eq!(days[4], (5, 1, 1));
        assert_eq!(days[30], (31, 6, 4));
    }

    #[test]
    fn test_sunday_start_does_not_skip_a_row() {
        // February 2026 starts on a Sunday.
        let days = positions(2026, 2);
        assert_eq!(days[0], (1, 0, 0));
        assert_eq!(days[6], (7, 6, 0));
        assert_eq!(days[7], (8, 0, 1));
    }

    #[test]
    fn test_invariants_hold_for_every_month() {
        for year in [1900, 2000, 2015, 2024, 2026] {
            for month in YearMonth::months_of(year).unwrap() {
                let days: Vec<_> = DayPositions::new(month).collect();
                assert_eq!(days.len() as u32, month.days_in_month());
                assert_eq!(days[0].1, month.first_weekday());

                let mut previous_row = 0;
                for (index, &(day, column, row)) in days.iter().enumerate() {
                    assert_eq!(day, index as u32 + 1);
                    assert_eq!(column, (month.first_weekday() + day - 1) % 7);
                    assert!(column <= 6);
                    assert!(row >= previous_row);
                    assert_eq!(row, month.week_of_month(day));
                    previous_row = row;
                }
                assert_eq!(previous_row + 1, month.weeks_in_month(), "{month}");
            }
        }
    }

    #[test]
    fn test_exact_size() {
        let iter = DayPositions::new(YearMonth::new(2024, 2).unwrap());
        assert_eq!(iter.len(), 29);
    }
}
