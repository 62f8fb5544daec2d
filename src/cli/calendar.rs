use std::fmt;

use ozkitchen_calendar::{MonthGrid, MonthOffset, WEEKDAY_HEADERS};
use time::Date;

use crate::{config::Config, error::AppResult};

/// Renders the month containing `month` (`YYYY-MM`), or the current month in
/// the configured timezone. Days of the following month are shown in
/// parentheses.
#[tracing::instrument(skip(config))]
pub fn render(config: &Config, month: Option<&str>) -> AppResult<String> {
    let reference = match month {
        Some(month) => ozkitchen_shared::parse_year_month(month)?,
        None => ozkitchen_shared::today(&config.session.timezone),
    };

    Ok(render_grid(reference))
}

pub fn render_grid(reference: Date) -> String {
    GridView(&MonthGrid::new(reference)).to_string()
}

struct GridView<'a>(&'a MonthGrid);

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:^28}", self.0.title())?;
        for header in WEEKDAY_HEADERS {
            write!(f, "{header:>4}")?;
        }
        writeln!(f)?;

        for row in self.0.rows() {
            for cell in row {
                let label = match (cell.offset, cell.day_number()) {
                    (MonthOffset::Current, Some(day)) => day.to_string(),
                    (MonthOffset::Next, Some(day)) => format!("({day})"),
                    _ => String::new(),
                };
                write!(f, "{label:>4}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
