//! Catalog configuration
//!
//! Catalogs are described in YAML: a currency code plus one rule per item
//! identifier, each with an optional unit price and an optional multibuy
//! offer. Amounts are decimal strings (`"0.50"`) converted to minor units
//! exactly, and every rule is validated while the catalog is built, so a
//! bad configuration fails at startup instead of at pricing time.

use std::{fs, path::Path};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    catalog::{Catalog, CatalogError},
    rules::{Multibuy, PricingRule, RuleError},
};

/// Errors raised while loading a catalog configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the configuration file
    #[error("failed to read catalog configuration: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid amount format
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Unknown currency code
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    /// A rule failed validation
    #[error("invalid rule for item {item}: {source}")]
    Rule {
        /// Item identifier the rule belongs to
        item: String,
        /// Underlying rule validation error
        source: RuleError,
    },

    /// Catalog construction error
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Wrapper for a catalog in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogConfig {
    /// ISO currency code for every price in the catalog (e.g., "GBP")
    pub currency: String,

    /// Map of item identifier -> rule configuration
    pub rules: FxHashMap<String, RuleConfig>,
}

/// Rule configuration from YAML
#[derive(Debug, Deserialize)]
pub struct RuleConfig {
    /// Price per single unit as a decimal amount (e.g., "0.50")
    pub unit_price: Option<String>,

    /// Multibuy offer configuration
    pub multibuy: Option<MultibuyConfig>,
}

/// Multibuy configuration from YAML
#[derive(Debug, Deserialize)]
pub struct MultibuyConfig {
    /// Units in one complete group
    pub quantity: u32,

    /// Price for each complete group as a decimal amount (e.g., "1.30")
    pub price: String,
}

impl CatalogConfig {
    /// Parse a catalog configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError::Yaml`] if the string is not valid YAML for
    /// this schema.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_norway::from_str(contents)?)
    }

    /// Parse a catalog configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Load a validated catalog straight from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed, or if
    /// any rule fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Catalog<'static>, ConfigError> {
        Self::from_path(path)?.try_into()
    }
}

impl TryFrom<CatalogConfig> for Catalog<'static> {
    type Error = ConfigError;

    fn try_from(config: CatalogConfig) -> Result<Self, Self::Error> {
        let currency = parse_currency(&config.currency)?;
        let mut rules = Vec::with_capacity(config.rules.len());

        for (item_id, rule_config) in config.rules {
            let unit_price = rule_config
                .unit_price
                .as_deref()
                .map(|amount| Ok::<_, ConfigError>(Money::from_minor(parse_amount(amount)?, currency)))
                .transpose()?;

            let multibuy = rule_config
                .multibuy
                .map(|multibuy_config| {
                    let price =
                        Money::from_minor(parse_amount(&multibuy_config.price)?, currency);

                    Multibuy::new(multibuy_config.quantity, price).map_err(|source| {
                        ConfigError::Rule {
                            item: item_id.clone(),
                            source,
                        }
                    })
                })
                .transpose()?;

            let rule =
                PricingRule::new(unit_price, multibuy).map_err(|source| ConfigError::Rule {
                    item: item_id.clone(),
                    source,
                })?;

            rules.push((item_id, rule));
        }

        Ok(Catalog::with_rules(rules, currency)?)
    }
}

/// Parse a decimal amount string (e.g., "0.50") into non-negative minor units.
fn parse_amount(s: &str) -> Result<i64, ConfigError> {
    let amount = s
        .trim()
        .parse::<Decimal>()
        .map_err(|_err| ConfigError::InvalidAmount(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| ConfigError::InvalidAmount(s.to_string()))?;

    if minor_units < 0 {
        return Err(ConfigError::InvalidAmount(s.to_string()));
    }

    Ok(minor_units)
}

/// Resolve an ISO currency code to its currency.
fn parse_currency(code: &str) -> Result<&'static Currency, ConfigError> {
    match code.trim() {
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        other => Err(ConfigError::UnknownCurrency(other.to_string())),
    }
}
