// Calendar grid model
// Fixed-shape month grid: 6 weeks of 7 cells, padded with adjacent-month days

use serde::{Deserialize, Serialize};

/// Number of week rows in a rendered month grid. Always 6, even for months
/// that fit in 5 rows; the last row is padded with next-month days so the
/// widget keeps a stable height across navigation.
pub const WEEKS_PER_GRID: usize = 6;

/// Number of cells per week row.
pub const DAYS_PER_WEEK: usize = 7;

/// One visible cell of the month grid.
///
/// `other_month` marks cells borrowed from the previous or next month to pad
/// the grid to its fixed rectangular shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub number: u32,
    pub other_month: bool,
}

/// A single week row of the grid.
pub type CalendarWeek = [CalendarDay; DAYS_PER_WEEK];

/// A full month grid: exactly 6 weeks of 7 days each (42 cells).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarGrid {
    /// Year of the reference month.
    pub year: i32,
    /// Reference month, 1-12.
    pub month: u32,
    pub weeks: [CalendarWeek; WEEKS_PER_GRID],
}

impl CalendarGrid {
    /// Iterate over all 42 cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flatten()
    }

    /// Count of cells belonging to the reference month itself.
    pub fn current_month_days(&self) -> usize {
        self.cells().filter(|d| !d.other_month).count()
    }

    /// Day numbers of the reference month in row-major order.
    pub fn current_month_numbers(&self) -> Vec<u32> {
        self.cells()
            .filter(|d| !d.other_month)
            .map(|d| d.number)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(number: u32, other_month: bool) -> CalendarDay {
        CalendarDay { number, other_month }
    }

    #[test]
    fn test_cells_iterates_row_major() {
        let mut weeks = [[day(0, true); DAYS_PER_WEEK]; WEEKS_PER_GRID];
        weeks[0][0] = day(30, true);
        weeks[5][6] = day(10, true);

        let grid = CalendarGrid {
            year: 2024,
            month: 6,
            weeks,
        };

        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(cells.len(), 42);
        assert_eq!(cells[0].number, 30);
        assert_eq!(cells[41].number, 10);
    }

    #[test]
    fn test_current_month_counts_ignore_padding() {
        let mut weeks = [[day(1, true); DAYS_PER_WEEK]; WEEKS_PER_GRID];
        weeks[1][0] = day(1, false);
        weeks[1][1] = day(2, false);

        let grid = CalendarGrid {
            year: 2024,
            month: 6,
            weeks,
        };

        assert_eq!(grid.current_month_days(), 2);
        assert_eq!(grid.current_month_numbers(), vec![1, 2]);
    }
}
