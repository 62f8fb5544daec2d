use std::collections::BTreeSet;

use time::Date;

/// Dates picked in the meal calendar but not yet submitted.
///
/// Dates compare at day granularity. Updates return a new selection and
/// leave the previous one untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateSelection(BTreeSet<Date>);

impl DateSelection {
    /// Adds `date` if absent, removes it if present.
    #[must_use]
    pub fn toggled(&self, date: Date) -> Self {
        let mut dates = self.0.clone();
        if !dates.remove(&date) {
            dates.insert(date);
        }

        Self(dates)
    }

    pub fn contains(&self, date: Date) -> bool {
        self.0.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Selected dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Date> for DateSelection {
    fn from_iter<T: IntoIterator<Item = Date>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
