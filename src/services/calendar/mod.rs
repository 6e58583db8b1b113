// Calendar grid builder
// Pure generation of the 6x7 month grid from a reference date

use chrono::{Datelike, NaiveDate};
use log::debug;

use crate::models::calendar::{CalendarDay, CalendarGrid, DAYS_PER_WEEK, WEEKS_PER_GRID};
use crate::utils::date::{days_in_month, first_weekday_of_month, previous_month};

/// Build the month grid for the month containing `reference`.
///
/// The week always starts on Sunday (column 0 = Sunday .. column 6 =
/// Saturday), independent of locale, so the same reference date always
/// produces the same grid. Cells before the first of the month are filled
/// backward from the previous month's last day, cells after the last day
/// count upward into the next month, and the grid is always exactly 6 weeks
/// tall regardless of how many rows the month needs.
pub fn build_grid(reference: NaiveDate) -> CalendarGrid {
    let year = reference.year();
    let month = reference.month();

    let in_month = days_in_month(year, month);
    let starting_weekday = first_weekday_of_month(year, month);
    let (prev_year, prev_month) = previous_month(year, month);
    let prev_month_days = days_in_month(prev_year, prev_month);

    debug!(
        "Building grid for {}-{:02}: {} days, first weekday {}",
        year, month, in_month, starting_weekday
    );

    let filler = CalendarDay {
        number: 0,
        other_month: true,
    };
    let mut weeks = [[filler; DAYS_PER_WEEK]; WEEKS_PER_GRID];

    // Day counter walks 1..=in_month once the leading cells are consumed,
    // then keeps going to number the trailing next-month cells.
    let mut day_counter: u32 = 1;

    for (week_index, week) in weeks.iter_mut().enumerate() {
        for (weekday, cell) in week.iter_mut().enumerate() {
            if week_index == 0 && (weekday as u32) < starting_weekday {
                *cell = CalendarDay {
                    number: prev_month_days - (starting_weekday - weekday as u32 - 1),
                    other_month: true,
                };
            } else if day_counter > in_month {
                *cell = CalendarDay {
                    number: day_counter - in_month,
                    other_month: true,
                };
                day_counter += 1;
            } else {
                *cell = CalendarDay {
                    number: day_counter,
                    other_month: false,
                };
                day_counter += 1;
            }
        }
    }

    CalendarGrid { year, month, weeks }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn grid_for(year: i32, month: u32) -> CalendarGrid {
        build_grid(NaiveDate::from_ymd_opt(year, month, 1).unwrap())
    }

    #[test]
    fn test_grid_is_always_six_weeks() {
        let grid = grid_for(2024, 6);
        assert_eq!(grid.weeks.len(), 6);
        assert_eq!(grid.cells().count(), 42);
    }

    #[test]
    fn test_current_month_days_match_month_length() {
        let grid = grid_for(2024, 6);
        assert_eq!(grid.current_month_days(), 30);

        let grid = grid_for(2024, 7);
        assert_eq!(grid.current_month_days(), 31);
    }

    #[test]
    fn test_current_month_numbers_are_contiguous() {
        let grid = grid_for(2024, 3);
        let expected: Vec<u32> = (1..=31).collect();
        assert_eq!(grid.current_month_numbers(), expected);
    }

    #[test]
    fn test_month_starting_on_sunday_has_no_leading_padding() {
        // September 2024 starts on a Sunday
        let grid = grid_for(2024, 9);
        assert_eq!(
            grid.weeks[0][0],
            CalendarDay {
                number: 1,
                other_month: false
            }
        );
    }

    #[test]
    fn test_leading_padding_counts_back_from_previous_month() {
        // June 2024 starts on a Saturday; May has 31 days, so the first week
        // is May 26..31 then June 1.
        let grid = grid_for(2024, 6);
        let first_week: Vec<u32> = grid.weeks[0].iter().map(|d| d.number).collect();
        assert_eq!(first_week, vec![26, 27, 28, 29, 30, 31, 1]);
        assert!(grid.weeks[0][..6].iter().all(|d| d.other_month));
        assert!(!grid.weeks[0][6].other_month);
    }

    #[test]
    fn test_thirty_one_day_month_starting_saturday_needs_all_six_rows() {
        // August 2026: 31 days, starts on a Saturday. 6 leading cells + 31
        // days = 37 cells, so day 31 lands in row 5.
        let grid = grid_for(2026, 8);
        assert_eq!(
            grid.weeks[5][1],
            CalendarDay {
                number: 31,
                other_month: false
            }
        );
        assert_eq!(
            grid.weeks[5][2],
            CalendarDay {
                number: 1,
                other_month: true
            }
        );
    }

    #[test]
    fn test_leap_year_february() {
        // February 2024: 29 days, starts on a Thursday
        let grid = grid_for(2024, 2);
        assert_eq!(grid.current_month_days(), 29);

        // Leading cells are the end of January (29, 30, 31)
        let leading: Vec<u32> = grid.weeks[0][..4].iter().map(|d| d.number).collect();
        assert_eq!(leading, vec![28, 29, 30, 31]);

        // Feb 29 falls on week 4, Thursday; everything after is next-month
        // padding numbered from 1.
        assert_eq!(
            grid.weeks[4][4],
            CalendarDay {
                number: 29,
                other_month: false
            }
        );
        assert_eq!(
            grid.weeks[4][5],
            CalendarDay {
                number: 1,
                other_month: true
            }
        );
        let last_week: Vec<u32> = grid.weeks[5].iter().map(|d| d.number).collect();
        assert_eq!(last_week, vec![3, 4, 5, 6, 7, 8, 9]);
        assert!(grid.weeks[5].iter().all(|d| d.other_month));
    }

    #[test]
    fn test_non_leap_february() {
        // February 2023: 28 days, starts on a Wednesday
        let grid = grid_for(2023, 2);
        assert_eq!(grid.current_month_days(), 28);
        assert_eq!(
            grid.weeks[4][2],
            CalendarDay {
                number: 28,
                other_month: false
            }
        );
        assert_eq!(
            grid.weeks[4][3],
            CalendarDay {
                number: 1,
                other_month: true
            }
        );
    }

    #[test]
    fn test_sixth_row_renders_even_when_five_would_fit() {
        // February 2021 starts on a Monday and has 28 days: 1 leading cell +
        // 28 days = 29 cells, which fits in 5 rows. The sixth row still
        // renders, padded entirely with March days (fixed-height policy).
        let grid = grid_for(2021, 2);
        let last_week: Vec<u32> = grid.weeks[5].iter().map(|d| d.number).collect();
        assert_eq!(last_week, vec![7, 8, 9, 10, 11, 12, 13]);
        assert!(grid.weeks[5].iter().all(|d| d.other_month));
    }

    #[test]
    fn test_reference_day_within_month_is_irrelevant() {
        let first = build_grid(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        let mid = build_grid(NaiveDate::from_ymd_opt(2024, 6, 17).unwrap());
        let last = build_grid(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
        assert_eq!(first, mid);
        assert_eq!(mid, last);
    }

    #[test]
    fn test_january_pads_from_december() {
        // January 2025 starts on a Wednesday; December 2024 has 31 days
        let grid = grid_for(2025, 1);
        let leading: Vec<u32> = grid.weeks[0][..3].iter().map(|d| d.number).collect();
        assert_eq!(leading, vec![29, 30, 31]);
    }
}
