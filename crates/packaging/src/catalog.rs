use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Validate, Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MealOptionInput {
    #[validate(length(min = 1, message = "Meal option id is required"))]
    pub id: String,
    #[validate(length(min = 1, message = "Meal option name is required"))]
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub price: u32,
    #[serde(default)]
    pub category: Option<String>,
}

/// Catalog entry. Prices are in the minor currency unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealOption {
    pub id: String,
    pub name: String,
    pub image: String,
    pub price: u32,
    pub category: Option<String>,
}

impl MealOption {
    pub fn new(input: MealOptionInput) -> ozkitchen_shared::Result<Self> {
        input.validate()?;

        Ok(Self {
            id: input.id,
            name: input.name,
            image: input.image,
            price: input.price,
            category: input.category.filter(|category| !category.trim().is_empty()),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog(Vec<MealOption>);

impl Catalog {
    pub fn new(
        inputs: impl IntoIterator<Item = MealOptionInput>,
    ) -> ozkitchen_shared::Result<Self> {
        let mut ids = HashSet::new();
        let mut options = vec![];

        for input in inputs {
            let option = MealOption::new(input)?;
            if !ids.insert(option.id.to_owned()) {
                ozkitchen_shared::bail!("Duplicate meal option id `{}`", option.id);
            }

            options.push(option);
        }

        Ok(Self(options))
    }

    pub fn get(&self, id: &str) -> Option<&MealOption> {
        self.0.iter().find(|option| option.id == id)
    }

    /// Same as [`Catalog::get`] but unknown ids are an error.
    pub fn require(&self, id: &str) -> ozkitchen_shared::Result<&MealOption> {
        self.get(id)
            .ok_or_else(|| ozkitchen_shared::Error::UnknownMealOption(id.to_owned()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &MealOption> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn lunchbox(id: &str, name: &str, image: &str, category: &str) -> MealOptionInput {
    MealOptionInput {
        id: id.to_owned(),
        name: name.to_owned(),
        image: format!("https://images.unsplash.com/{image}?w=200&h=200&fit=crop"),
        price: 170,
        category: Some(category.to_owned()),
    }
}

/// The lunchbox menu served when no catalog is configured.
pub fn default_meal_options() -> Vec<MealOptionInput> {
    vec![
        lunchbox("1", "Shiro Ena Gomen", "photo-1546069901-ba9599a7e63c", "Fasting"),
        lunchbox("2", "Misir Ena Shiro", "photo-1567620905732-2d1ec7ab7445", "Fasting"),
        lunchbox("3", "Dinech Ena Gomen", "photo-1604908176997-125f25cc6f3d", "Regular"),
        lunchbox("4", "Tibs", "photo-1529042410759-befb1204b468", "Regular"),
        lunchbox("5", "Firfir", "photo-1552332386-f8dd00dc2f85", "Fasting"),
    ]
}
