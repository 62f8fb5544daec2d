use ozkitchen_packaging::{Catalog, EntryId, Ledger, MealOption, default_meal_options};
use rand::{Rng, rngs::StdRng};
use time::{Date, Duration, macros::date};

pub fn catalog() -> anyhow::Result<Catalog> {
    Ok(Catalog::new(default_meal_options())?)
}

#[allow(dead_code)]
pub fn option(catalog: &Catalog, id: &str) -> anyhow::Result<MealOption> {
    Ok(catalog.require(id)?.clone())
}

pub fn random_dates(rng: &mut StdRng) -> Vec<Date> {
    let start = date!(2025 - 09 - 25);
    let count = rng.random_range(0..5);

    (0..count)
        .map(|_| start + Duration::days(rng.random_range(0..21)))
        .collect()
}

/// Applies one random addition or quantity change.
pub fn random_step(rng: &mut StdRng, catalog: &Catalog, ledger: &Ledger) -> Ledger {
    let adjust = !ledger.is_empty() && rng.random_bool(0.4);

    if adjust {
        let entries = ledger.to_vec();
        let id = entries[rng.random_range(0..entries.len())].id();
        let delta = rng.random_range(-3..=3);

        return ledger.adjust_quantity(&id, delta);
    }

    let options = catalog.iter().collect::<Vec<_>>();
    let option = options[rng.random_range(0..options.len())];

    if rng.random_bool(0.1) {
        let ghost = EntryId::new("missing", date!(2025 - 10 - 01));
        return ledger.adjust_quantity(&ghost, -1);
    }

    ledger.add_selection(option, random_dates(rng))
}
