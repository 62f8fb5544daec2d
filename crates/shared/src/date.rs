use time::{
    Date, Month, OffsetDateTime, format_description::BorrowedFormatItem,
    macros::format_description,
};
use time_tz::{ToTimezone, timezones};

use crate::{Error, Result};

const ISO_DAY: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Current calendar day in the given IANA timezone.
///
/// Unknown timezone names fall back to UTC. Every date handled by the
/// ordering flow is a plain `Date`, so this is the only place where a
/// clock and an offset are involved.
pub fn today(tz: &str) -> Date {
    let mut now = OffsetDateTime::now_utc();

    match timezones::get_by_name(tz) {
        Some(tz) => now = now.to_timezone(tz),
        None => tracing::warn!(tz = %tz, "Unknown timezone, using UTC"),
    }

    now.date()
}

/// `YYYY-MM-DD`
pub fn format_iso(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

pub fn parse_iso(value: &str) -> Result<Date> {
    Ok(Date::parse(value.trim(), ISO_DAY)?)
}

/// Parses `YYYY-MM` into the first day of that month.
pub fn parse_year_month(value: &str) -> Result<Date> {
    let value = value.trim();
    let Some((year, month)) = value.split_once('-') else {
        return Err(Error::InvalidDate(format!("expected YYYY-MM, got `{value}`")));
    };

    let year = year
        .parse::<i32>()
        .map_err(|e| Error::InvalidDate(format!("{value}: {e}")))?;
    let month = month
        .parse::<u8>()
        .map_err(|e| Error::InvalidDate(format!("{value}: {e}")))?;

    Ok(Date::from_calendar_date(year, Month::try_from(month)?, 1)?)
}

/// Three letter month name, e.g. `Oct`.
pub fn short_month(month: Month) -> String {
    month.to_string().chars().take(3).collect()
}

/// Long day label used on planned meal rows and the receipt, e.g. `Sunday Oct 5`.
pub fn day_label(date: Date) -> String {
    format!(
        "{} {} {}",
        date.weekday(),
        short_month(date.month()),
        date.day()
    )
}
