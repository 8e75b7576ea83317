//! Catalog

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::rules::PricingRule;

/// Errors related to catalog construction or lookups.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// No pricing rule is registered for the item.
    #[error("no pricing rule registered for item {0}")]
    UnknownItem(String),

    /// A rule's prices use a different currency than the catalog
    /// (item, rule currency, catalog currency).
    #[error("item {0} is priced in {1}, but the catalog uses {2}")]
    CurrencyMismatch(String, &'static str, &'static str),
}

/// The immutable set of pricing rules, one per item identifier.
///
/// Built once at startup and shared by reference across any number of
/// baskets; it has no interior mutability, so concurrent lookups need no
/// locking.
#[derive(Debug)]
pub struct Catalog<'a> {
    rules: FxHashMap<String, PricingRule<'a>>,
    currency: &'static Currency,
}

impl<'a> Catalog<'a> {
    /// Create an empty catalog in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Catalog {
            rules: FxHashMap::default(),
            currency,
        }
    }

    /// Create a catalog from `(item identifier, rule)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CurrencyMismatch`] if any rule's prices use a
    /// different currency than `currency`.
    pub fn with_rules<S>(
        rules: impl IntoIterator<Item = (S, PricingRule<'a>)>,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError>
    where
        S: Into<String>,
    {
        let mut validated = FxHashMap::default();

        for (item_id, rule) in rules {
            let item_id = item_id.into();
            let rule_currency = rule.currency();

            if rule_currency != currency {
                return Err(CatalogError::CurrencyMismatch(
                    item_id,
                    rule_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ));
            }

            validated.insert(item_id, rule);
        }

        Ok(Catalog {
            rules: validated,
            currency,
        })
    }

    /// Look up the pricing rule for an item identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownItem`] if no rule is registered for
    /// `item_id`.
    pub fn lookup(&self, item_id: &str) -> Result<&PricingRule<'a>, CatalogError> {
        self.rules
            .get(item_id)
            .ok_or_else(|| CatalogError::UnknownItem(item_id.to_string()))
    }

    /// Get the number of rules in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the catalog has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Get the currency of the catalog.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
