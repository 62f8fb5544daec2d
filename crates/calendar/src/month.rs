use time::{Date, Month};

/// First day of the month containing `date`.
pub fn first_of_month(date: Date) -> Date {
    date.replace_day(1).unwrap_or(date)
}

/// Number of days in the month containing `date` (28 to 31).
pub fn days_in_month(date: Date) -> u8 {
    date.month().length(date.year())
}

/// First day of the month before the one containing `date`.
pub fn previous_month(date: Date) -> Date {
    let (year, month) = match date.month() {
        Month::January => (date.year() - 1, Month::December),
        month => (date.year(), month.previous()),
    };

    Date::from_calendar_date(year, month, 1).unwrap_or(date)
}

/// First day of the month after the one containing `date`.
pub fn next_month(date: Date) -> Date {
    let (year, month) = match date.month() {
        Month::December => (date.year() + 1, Month::January),
        month => (date.year(), month.next()),
    };

    Date::from_calendar_date(year, month, 1).unwrap_or(date)
}
