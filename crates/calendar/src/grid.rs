use time::{Date, Duration, Month};

use crate::{DateSelection, days_in_month, first_of_month};

/// 6 rows of 7 days.
pub const GRID_CELLS: usize = 42;

pub const WEEKDAY_HEADERS: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthOffset {
    /// Padding before the first day of the month.
    None,
    Current,
    /// Overflow, dimmed when rendered.
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub offset: MonthOffset,
    pub day: Option<u8>,
    /// `None` for padding, and for overflow days past `Date::MAX`.
    pub date: Option<Date>,
}

impl CalendarCell {
    const PADDING: Self = Self {
        offset: MonthOffset::None,
        day: None,
        date: None,
    };

    pub fn day_number(&self) -> Option<u8> {
        self.day
    }

    pub fn is_padding(&self) -> bool {
        self.offset == MonthOffset::None
    }

    pub fn is_overflow(&self) -> bool {
        self.offset == MonthOffset::Next
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    first: Date,
    pub year: i32,
    pub month: Month,
    /// Empty cells before day 1, with the week starting on Monday.
    pub leading_padding: u8,
    pub days_in_month: u8,
    pub cells: [CalendarCell; GRID_CELLS],
}

impl MonthGrid {
    /// Builds the grid for the month containing `reference`. Only the year
    /// and month of `reference` are used.
    pub fn new(reference: Date) -> Self {
        let first = first_of_month(reference);
        let leading_padding = first.weekday().number_days_from_monday();
        let days_in_month = days_in_month(first);
        let in_month_end = leading_padding as usize + days_in_month as usize;

        let cells = std::array::from_fn(|index| {
            if index < leading_padding as usize {
                return CalendarCell::PADDING;
            }

            // Days after the month run on from its first day, so overflow
            // cells land in the following month.
            let offset = (index - leading_padding as usize) as i64;
            let date = first.checked_add(Duration::days(offset));

            if index < in_month_end {
                CalendarCell {
                    offset: MonthOffset::Current,
                    day: Some(offset as u8 + 1),
                    date,
                }
            } else {
                CalendarCell {
                    offset: MonthOffset::Next,
                    day: Some((index - in_month_end) as u8 + 1),
                    date,
                }
            }
        });

        Self {
            first,
            year: first.year(),
            month: first.month(),
            leading_padding,
            days_in_month,
            cells,
        }
    }

    pub fn first_day(&self) -> Date {
        self.first
    }

    /// e.g. `February 2024`
    pub fn title(&self) -> String {
        format!("{} {}", self.month, self.year)
    }

    pub fn overflow_count(&self) -> usize {
        GRID_CELLS - self.leading_padding as usize - self.days_in_month as usize
    }

    pub fn cell(&self, index: usize) -> Option<&CalendarCell> {
        self.cells.get(index)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(WEEKDAY_HEADERS.len())
    }

    pub fn is_selected(&self, index: usize, selection: &DateSelection) -> bool {
        self.cell(index)
            .and_then(|cell| cell.date)
            .is_some_and(|date| selection.contains(date))
    }
}

pub fn build_month_grid(reference: Date) -> MonthGrid {
    MonthGrid::new(reference)
}
