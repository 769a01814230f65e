use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;
use validator::Validate;

use crate::services::pricing::{BASE_PRICE, DISCOUNT_PRICE, SMALL_THEATER_CAPACITY};

/// Optional config file in the working directory (`cinema.toml`).
const CONFIG_FILE: &str = "cinema";
/// Prefix for environment overrides, e.g. `CINEMA_PRICING__BASE_PRICE=12`.
const ENV_PREFIX: &str = "CINEMA";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

// Главная структура конфигурации
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Config {
    #[validate(nested)]
    pub app: AppConfig,
    #[validate(nested)]
    pub theater: TheaterConfig,
    #[validate(nested)]
    pub pricing: PricingConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AppConfig {
    pub rust_log: String,
    pub stats_format: StatsFormat,
    #[validate(length(max = 8))]
    pub currency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsFormat {
    Text,
    Json,
}

// Размеры зала. Если заданы оба значения, оператора не спрашиваем.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TheaterConfig {
    #[serde(default)]
    #[validate(range(min = 1))]
    pub rows: Option<i32>,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub columns: Option<i32>,
    #[validate(range(min = 1))]
    pub max_seats: u32,
}

// Тарифы
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PricingConfig {
    #[validate(range(min = 1))]
    pub base_price: u32,
    #[validate(range(min = 1))]
    pub discount_price: u32,
    #[validate(range(min = 1))]
    pub small_theater_capacity: u32,
}

impl TheaterConfig {
    /// Dimensions fixed by configuration, if both are set.
    pub fn preset_dimensions(&self) -> Option<(i32, i32)> {
        self.rows.zip(self.columns)
    }
}

impl Config {
    /// Defaults, then `cinema.toml` (if present), then `CINEMA_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let builder = Self::defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );
        Self::finish(builder)
    }

    /// Defaults overlaid with a TOML document.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let builder = Self::defaults()?.add_source(File::from_str(contents, FileFormat::Toml));
        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let builder = config::Config::builder()
            .set_default("app.rust_log", "cinema_tickets=warn")?
            .set_default("app.stats_format", "text")?
            .set_default("app.currency", "$")?
            .set_default("theater.max_seats", 10_000_i64)?
            .set_default("pricing.base_price", i64::from(BASE_PRICE))?
            .set_default("pricing.discount_price", i64::from(DISCOUNT_PRICE))?
            .set_default(
                "pricing.small_theater_capacity",
                i64::from(SMALL_THEATER_CAPACITY),
            )?;
        Ok(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            app: AppConfig {
                rust_log: "cinema_tickets=warn".to_string(),
                stats_format: StatsFormat::Text,
                currency: "$".to_string(),
            },
            theater: TheaterConfig {
                rows: None,
                columns: None,
                max_seats: 10_000,
            },
            pricing: PricingConfig {
                base_price: BASE_PRICE,
                discount_price: DISCOUNT_PRICE,
                small_theater_capacity: SMALL_THEATER_CAPACITY,
            },
        }
    }
}
