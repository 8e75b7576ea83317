//! Till prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::{Basket, TotalError},
    catalog::{Catalog, CatalogError},
    config::{CatalogConfig, ConfigError, MultibuyConfig, RuleConfig},
    pricing::{PricingError, line_price},
    rules::{Multibuy, PricingRule, RuleError},
};
