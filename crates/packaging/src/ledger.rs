use std::collections::{BTreeMap, BTreeSet};

use ozkitchen_shared::short_month;
use serde::Serialize;
use time::{Date, macros::date};

use crate::{Catalog, EntryId, MealOption, PlannedMealEntry};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_quantity: u64,
    pub total_price: u64,
}

/// Planned meals of a session, one row per (option, day).
///
/// Rows are kept in ascending date order and never hold a zero quantity.
/// Every mutation returns a new ledger; the receiver is left as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger(BTreeMap<EntryId, PlannedMealEntry>);

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger from already planned rows. Rows sharing an identity
    /// are merged by summing their quantities; zero quantities are dropped.
    pub fn seeded(entries: impl IntoIterator<Item = PlannedMealEntry>) -> Self {
        let mut rows: BTreeMap<EntryId, PlannedMealEntry> = BTreeMap::new();

        for entry in entries {
            if entry.quantity == 0 {
                continue;
            }

            match rows.get_mut(&entry.id()) {
                Some(row) => row.quantity = row.quantity.saturating_add(entry.quantity),
                None => {
                    rows.insert(entry.id(), entry);
                }
            }
        }

        Self(rows)
    }

    /// Adds one portion of `option` on each of `dates`.
    ///
    /// `dates` is treated as a set: a date given twice counts once. Existing
    /// rows are incremented and keep the display fields they were created
    /// with; new rows copy them from `option`.
    #[must_use]
    pub fn add_selection(
        &self,
        option: &MealOption,
        dates: impl IntoIterator<Item = Date>,
    ) -> Self {
        let dates = dates.into_iter().collect::<BTreeSet<_>>();
        let mut rows = self.0.clone();

        for date in dates {
            let id = EntryId::new(option.id.to_owned(), date);
            match rows.get_mut(&id) {
                Some(row) => {
                    row.quantity = row.quantity.saturating_add(1);
                    tracing::debug!(
                        entry = %id,
                        quantity = row.quantity,
                        "Incremented planned meal"
                    );
                }
                None => {
                    tracing::debug!(entry = %id, "Planned new meal");
                    rows.insert(id, PlannedMealEntry::from_option(option, date));
                }
            }
        }

        Self(rows)
    }

    /// Changes the quantity of a row by `delta`, saturating at zero. A row
    /// reaching zero is removed. Unknown ids leave the ledger unchanged.
    #[must_use]
    pub fn adjust_quantity(&self, id: &EntryId, delta: i64) -> Self {
        let mut rows = self.0.clone();

        let Some(row) = rows.get_mut(id) else {
            tracing::debug!(entry = %id, "Adjusting unknown planned meal");
            return Self(rows);
        };

        let quantity = i64::from(row.quantity).saturating_add(delta).max(0);
        row.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        if row.quantity == 0 {
            rows.remove(id);
            tracing::debug!(entry = %id, "Removed planned meal");
        }

        Self(rows)
    }

    pub fn totals(&self) -> Totals {
        self.0.values().fold(Totals::default(), |totals, entry| Totals {
            total_quantity: totals.total_quantity + u64::from(entry.quantity),
            total_price: totals.total_price + entry.line_total(),
        })
    }

    pub fn get(&self, id: &EntryId) -> Option<&PlannedMealEntry> {
        self.0.get(id)
    }

    /// Rows in ascending date order.
    pub fn entries(&self) -> impl Iterator<Item = &PlannedMealEntry> {
        self.0.values()
    }

    pub fn to_vec(&self) -> Vec<PlannedMealEntry> {
        self.entries().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First and last planned day.
    pub fn date_range(&self) -> Option<(Date, Date)> {
        let first = self.0.keys().next()?.date;
        let last = self.0.keys().next_back()?.date;

        Some((first, last))
    }

    /// e.g. `Oct 5 - 9`, or `Oct 30 - Nov 2` across months.
    pub fn date_range_label(&self) -> Option<String> {
        let (first, last) = self.date_range()?;
        let start = format!("{} {}", short_month(first.month()), first.day());

        let label = if first == last {
            start
        } else if (first.year(), first.month()) == (last.year(), last.month()) {
            format!("{start} - {}", last.day())
        } else {
            format!("{start} - {} {}", short_month(last.month()), last.day())
        };

        Some(label)
    }
}

/// The week the packaging screen opens with before anything is picked.
pub fn sample_plan(catalog: &Catalog) -> Ledger {
    let days = [
        ("1", date!(2025 - 10 - 05)),
        ("2", date!(2025 - 10 - 06)),
        ("3", date!(2025 - 10 - 07)),
        ("4", date!(2025 - 10 - 08)),
        ("3", date!(2025 - 10 - 09)),
    ];

    Ledger::seeded(days.into_iter().filter_map(|(id, date)| {
        catalog
            .get(id)
            .map(|option| PlannedMealEntry::from_option(option, date))
    }))
}
