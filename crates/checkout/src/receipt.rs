use std::fmt;

use ozkitchen_packaging::{Catalog, PlannedMealEntry, sample_plan};
use ozkitchen_shared::day_label;
use serde::Serialize;

use crate::SubscriptionType;

/// Snapshot carried from packaging to the receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Handoff {
    pub subscription_type: Option<SubscriptionType>,
    pub price: Option<u32>,
    pub meals: Vec<PlannedMealEntry>,
    pub total_price: u64,
    pub total_meals: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    pub entry_id: String,
    pub name: String,
    pub quantity: u32,
    pub price: u32,
    pub line_total: u64,
    pub date_label: String,
}

impl From<&PlannedMealEntry> for ReceiptLine {
    fn from(entry: &PlannedMealEntry) -> Self {
        Self {
            entry_id: entry.id().to_string(),
            name: entry.name.to_owned(),
            quantity: entry.quantity,
            price: entry.price,
            line_total: entry.line_total(),
            date_label: day_label(entry.date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub subscription_type: SubscriptionType,
    pub budget: Option<u32>,
    pub lines: Vec<ReceiptLine>,
    pub subtotal: u64,
    pub total_meals: u64,
}

impl Receipt {
    /// Lines with a zero quantity are left out. A handoff without meals
    /// shows the sample week instead, and a missing plan reads as weekly.
    ///
    /// `handoff.total_price` and `handoff.total_meals` are not read: the
    /// subtotal is always summed from the lines shown.
    pub fn new(handoff: &Handoff, catalog: &Catalog) -> Self {
        let fallback;
        let meals = if handoff.meals.is_empty() {
            fallback = sample_plan(catalog).to_vec();
            &fallback
        } else {
            &handoff.meals
        };

        let lines = meals
            .iter()
            .filter(|meal| meal.quantity > 0)
            .map(ReceiptLine::from)
            .collect::<Vec<_>>();

        Self {
            subscription_type: handoff.subscription_type.unwrap_or(SubscriptionType::Weekly),
            budget: handoff.price,
            subtotal: lines.iter().map(|line| line.line_total).sum(),
            total_meals: lines.iter().map(|line| u64::from(line.quantity)).sum(),
            lines,
        }
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Package: {}", self.subscription_type)?;
        if let Some(budget) = self.budget {
            writeln!(f, "Budget: {budget} br")?;
        }

        for line in &self.lines {
            writeln!(
                f,
                "  {:<20} x{:<3} {:>6} br  {}",
                line.name, line.quantity, line.line_total, line.date_label
            )?;
        }

        write!(f, "Sub Total: {} br ({} meals)", self.subtotal, self.total_meals)
    }
}
