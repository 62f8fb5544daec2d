use std::{fmt, str::FromStr};

use ozkitchen_shared::{format_iso, parse_iso};
use serde::Serialize;
use time::Date;

use crate::MealOption;

/// Identity of a planned meal row: one option on one day.
///
/// Ordered by date first, then option id, which is the order rows are
/// listed in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId {
    pub date: Date,
    pub option_id: String,
}

impl EntryId {
    pub fn new(option_id: impl Into<String>, date: Date) -> Self {
        Self {
            date,
            option_id: option_id.into(),
        }
    }
}

/// `<optionId>-<YYYY-MM-DD>`
impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.option_id, format_iso(self.date))
    }
}

impl FromStr for EntryId {
    type Err = ozkitchen_shared::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        let split = value.len().checked_sub(11).filter(|at| *at > 0);

        let Some((option_id, date)) = split
            .filter(|at| value.is_char_boundary(*at))
            .map(|at| value.split_at(at))
        else {
            ozkitchen_shared::bail!("Invalid entry id `{}`", value);
        };

        let Some(date) = date.strip_prefix('-') else {
            ozkitchen_shared::bail!("Invalid entry id `{}`", value);
        };

        Ok(Self::new(option_id, parse_iso(date)?))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedMealEntry {
    pub option_id: String,
    #[serde(rename = "dateISO", serialize_with = "serialize_iso")]
    pub date: Date,
    pub quantity: u32,
    pub name: String,
    pub image: String,
    pub price: u32,
    pub category: Option<String>,
}

impl PlannedMealEntry {
    /// New row with quantity 1, copying display fields from `option`.
    pub fn from_option(option: &MealOption, date: Date) -> Self {
        Self {
            option_id: option.id.to_owned(),
            date,
            quantity: 1,
            name: option.name.to_owned(),
            image: option.image.to_owned(),
            price: option.price,
            category: option.category.to_owned(),
        }
    }

    pub fn id(&self) -> EntryId {
        EntryId::new(self.option_id.to_owned(), self.date)
    }

    pub fn date_iso(&self) -> String {
        format_iso(self.date)
    }

    pub fn line_total(&self) -> u64 {
        u64::from(self.quantity) * u64::from(self.price)
    }
}

fn serialize_iso<S: serde::Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_iso(*date))
}
