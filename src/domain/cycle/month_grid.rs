//! Week-aligned month grids for the calendar display.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// One cell of the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDay {
    pub date: NaiveDate,
    /// False for the leading/trailing days borrowed from adjacent months.
    pub in_selected_month: bool,
}

/// Every day shown in the month grid containing `selected`, Sunday-first.
///
/// The grid starts on the Sunday at or before the first of the month and
/// ends on the Saturday at or after its last day, so its length is always
/// a multiple of seven.
pub fn month_grid(selected: NaiveDate) -> Vec<GridDay> {
    let first_of_month = selected.with_day(1).expect("day 1 exists in every month");
    let last_of_month = last_day_of_month(first_of_month);

    let leading = first_of_month.weekday().num_days_from_sunday() as u64;
    let trailing = (Weekday::Sat.num_days_from_sunday()
        - last_of_month.weekday().num_days_from_sunday()) as u64;

    let grid_start = first_of_month - Days::new(leading);
    let grid_end = last_of_month + Days::new(trailing);

    let mut days = Vec::new();
    let mut current = grid_start;
    while current <= grid_end {
        days.push(GridDay {
            date: current,
            in_selected_month: current.year() == selected.year()
                && current.month() == selected.month(),
        });
        current = current + Days::new(1);
    }
    days
}

fn last_day_of_month(first_of_month: NaiveDate) -> NaiveDate {
    let (next_year, next_month) = if first_of_month.month() == 12 {
        (first_of_month.year() + 1, 1)
    } else {
        (first_of_month.year(), first_of_month.month() + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("day 1 exists in every month")
        .pred_opt()
        .expect("month starts are never the minimum date")
}
