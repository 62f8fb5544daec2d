use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use ozkitchen_checkout::SubscriptionType;
use ozkitchen_packaging::{
    Catalog, Ledger, MealOptionInput, PlannedMealEntry, default_meal_options, sample_plan,
};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Meals already planned when packaging opens.
    #[serde(default)]
    pub planned: Vec<PlannedConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// IANA name, used to find "today" for the meal calendar
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub default_subscription: SubscriptionType,
    /// Open packaging with the sample week already planned
    #[serde(default)]
    pub seed_sample_plan: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            default_subscription: SubscriptionType::default(),
            seed_sample_plan: false,
        }
    }
}

fn default_timezone() -> String {
    "UTC".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    #[serde(default = "default_meal_options")]
    pub meals: Vec<MealOptionInput>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            meals: default_meal_options(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlannedConfig {
    pub option_id: String,
    /// YYYY-MM-DD
    pub date: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (OZKITCHEN__SESSION__TIMEZONE, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("observability.log_level", "info")?
            .set_default("session.timezone", "UTC")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("OZKITCHEN")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.catalog.meals.is_empty() {
            return Err("Catalog must contain at least one meal option".to_string());
        }
        if time_tz::timezones::get_by_name(&self.session.timezone).is_none() {
            return Err(format!("Unknown timezone `{}`", self.session.timezone));
        }
        Ok(())
    }

    pub fn catalog(&self) -> ozkitchen_shared::Result<Catalog> {
        Catalog::new(self.catalog.meals.to_vec())
    }

    /// Planned meals to open packaging with. Entries naming an option that
    /// is not in the catalog are rejected.
    pub fn planned_ledger(&self, catalog: &Catalog) -> ozkitchen_shared::Result<Ledger> {
        let mut entries = vec![];

        for planned in &self.planned {
            let option = catalog.require(&planned.option_id)?;
            let date = ozkitchen_shared::parse_iso(&planned.date)?;

            entries.push(PlannedMealEntry {
                quantity: planned.quantity,
                ..PlannedMealEntry::from_option(option, date)
            });
        }

        let ledger = Ledger::seeded(entries);
        if ledger.is_empty() && self.session.seed_sample_plan {
            return Ok(sample_plan(catalog));
        }

        Ok(ledger)
    }
}
