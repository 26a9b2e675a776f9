// File: src/grid.rs
//! Month grid arithmetic: which cells a month view shows and how the
//! displayed month moves.
use chrono::{Datelike, Months, NaiveDate};

/// One position in the month view. `None` is padding before the 1st.
pub type Cell = Option<NaiveDate>;

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Length of the month containing `reference` (proleptic Gregorian).
pub fn days_in_month(reference: NaiveDate) -> u32 {
    let first = first_of_month(reference);
    first
        .iter_days()
        .take_while(|d| d.month() == first.month())
        .count() as u32
}

/// Column of the first of `reference`'s month, Sunday = 0.
pub fn weekday_offset(reference: NaiveDate) -> u32 {
    first_of_month(reference).weekday().num_days_from_sunday()
}

pub fn first_of_month(reference: NaiveDate) -> NaiveDate {
    reference.with_day(1).unwrap_or(reference)
}

/// Cells for the month containing `reference`: leading padding so the 1st
/// lands in its weekday column, then every day of the month.
pub fn month_grid(reference: NaiveDate) -> Vec<Cell> {
    let offset = weekday_offset(reference) as usize;
    let first = first_of_month(reference);
    let len = days_in_month(reference);

    let mut cells: Vec<Cell> = Vec::with_capacity(offset + len as usize);
    cells.extend(std::iter::repeat_n(None, offset));
    cells.extend(first.iter_days().take(len as usize).map(Some));
    cells
}

/// Splits cells into rows of seven. The last row may be short.
pub fn weeks(cells: &[Cell]) -> Vec<&[Cell]> {
    cells.chunks(7).collect()
}

/// Moves `reference` by whole months, clamping the day to the target
/// month's length. Out-of-range results leave the date unchanged.
pub fn shift_months(reference: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        reference.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        reference.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(reference)
}

pub fn shift_years(reference: NaiveDate, years: i32) -> NaiveDate {
    shift_months(reference, years.saturating_mul(12))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_starting_wednesday_with_30_days() {
        // April 2026 starts on a Wednesday.
        let grid = month_grid(ymd(2026, 4, 17));
        assert_eq!(grid.len(), 33);
        assert!(grid[..3].iter().all(Option::is_none));
        assert_eq!(grid[3], Some(ymd(2026, 4, 1)));
        assert_eq!(grid[32], Some(ymd(2026, 4, 30)));
    }

    #[test]
    fn sunday_start_has_no_padding() {
        // June 2025 starts on a Sunday.
        let grid = month_grid(ymd(2025, 6, 10));
        assert_eq!(weekday_offset(ymd(2025, 6, 10)), 0);
        assert_eq!(grid[0], Some(ymd(2025, 6, 1)));
        assert_eq!(grid.len(), 30);
    }

    #[test]
    fn february_lengths() {
        assert_eq!(days_in_month(ymd(2024, 2, 10)), 29);
        assert_eq!(days_in_month(ymd(2023, 2, 10)), 28);
        assert_eq!(days_in_month(ymd(1900, 2, 1)), 28);
        assert_eq!(days_in_month(ymd(2000, 2, 1)), 29);
    }

    #[test]
    fn month_lengths() {
        let lengths: Vec<u32> = (1..=12).map(|m| days_in_month(ymd(2025, m, 1))).collect();
        assert_eq!(lengths, [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]);
    }

    #[test]
    fn weeks_are_seven_wide() {
        let grid = month_grid(ymd(2026, 4, 1));
        let rows = weeks(&grid);
        assert_eq!(rows.len(), 5);
        assert!(rows[..4].iter().all(|r| r.len() == 7));
        assert_eq!(rows[4].len(), 5);
    }

    #[test]
    fn month_shift_clamps_day() {
        assert_eq!(shift_months(ymd(2024, 1, 31), 1), ymd(2024, 2, 29));
        assert_eq!(shift_months(ymd(2024, 3, 31), -1), ymd(2024, 2, 29));
        assert_eq!(shift_months(ymd(2024, 12, 15), 1), ymd(2025, 1, 15));
        assert_eq!(shift_years(ymd(2024, 2, 29), 1), ymd(2025, 2, 28));
        assert_eq!(shift_years(ymd(2024, 2, 29), -4), ymd(2020, 2, 29));
    }

    #[test]
    fn shift_out_of_range_is_a_no_op() {
        let end = NaiveDate::MAX;
        assert_eq!(shift_months(end, 1), end);
    }
}
