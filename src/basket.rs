//! Basket

use rustc_hash::FxHashMap;
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::{
    catalog::{Catalog, CatalogError},
    pricing::{PricingError, line_price},
};

/// Errors that can occur while totalling a basket.
#[derive(Debug, Error, PartialEq)]
pub enum TotalError {
    /// A scanned item has no rule in the catalog.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A line price could not be computed.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// The mutable record of scanned quantities for one checkout session.
///
/// A basket shares the catalog it was built with; scanning needs `&mut self`,
/// so two threads of control cannot interleave scans on one basket without
/// external synchronisation.
#[derive(Debug)]
pub struct Basket<'a> {
    quantities: FxHashMap<String, u32>,
    catalog: &'a Catalog<'a>,
}

impl<'a> Basket<'a> {
    /// Create an empty basket bound to a catalog.
    #[must_use]
    pub fn new(catalog: &'a Catalog<'a>) -> Self {
        Basket {
            quantities: FxHashMap::default(),
            catalog,
        }
    }

    /// Record one more unit of an item.
    ///
    /// The identifier is not checked against the catalog here; an unknown
    /// item only surfaces when the basket is totalled.
    pub fn scan(&mut self, item_id: impl Into<String>) {
        *self.quantities.entry(item_id.into()).or_insert(0) += 1;
    }

    /// Calculate the total price of the basket.
    ///
    /// Recomputes from scratch on every call: each distinct item's quantity
    /// is priced under its rule and the line prices are summed. Scan order
    /// never affects the result.
    ///
    /// # Errors
    ///
    /// - [`TotalError::Catalog`]: a scanned item has no rule in the catalog.
    /// - [`TotalError::Pricing`]: a line price overflowed.
    /// - [`TotalError::Money`]: money arithmetic failed while summing.
    pub fn total(&self) -> Result<Money<'a, Currency>, TotalError> {
        self.quantities.iter().try_fold(
            Money::from_minor(0, self.catalog.currency()),
            |acc, (item_id, quantity)| {
                let rule = self.catalog.lookup(item_id)?;
                let line = line_price(rule, *quantity)?;

                Ok(acc.add(line)?)
            },
        )
    }

    /// Get the quantity scanned for an item (zero if never scanned).
    #[must_use]
    pub fn quantity(&self, item_id: &str) -> u32 {
        self.quantities.get(item_id).copied().unwrap_or(0)
    }

    /// Get the number of distinct items scanned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    /// Check if the basket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Get the catalog the basket prices against.
    #[must_use]
    pub fn catalog(&self) -> &'a Catalog<'a> {
        self.catalog
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::GBP;
    use testresult::TestResult;

    use crate::rules::{Multibuy, PricingRule};

    use super::*;

    fn test_catalog<'a>() -> TestResult<Catalog<'a>> {
        let a_multibuy = Multibuy::new(3, Money::from_minor(130, GBP))?;
        let b_multibuy = Multibuy::new(2, Money::from_minor(45, GBP))?;

        let rules = [
            (
                "A",
                PricingRule::unit_with_multibuy(Money::from_minor(50, GBP), a_multibuy),
            ),
            (
                "B",
                PricingRule::unit_with_multibuy(Money::from_minor(30, GBP), b_multibuy),
            ),
            ("C", PricingRule::unit(Money::from_minor(20, GBP))),
        ];

        Ok(Catalog::with_rules(rules, GBP)?)
    }

    #[test]
    fn new_basket_is_empty() -> TestResult {
        let catalog = test_catalog()?;
        let basket = Basket::new(&catalog);

        assert!(basket.is_empty());
        assert_eq!(basket.len(), 0);

        Ok(())
    }

    #[test]
    fn empty_basket_totals_zero() -> TestResult {
        let catalog = test_catalog()?;
        let basket = Basket::new(&catalog);

        assert_eq!(basket.total()?, Money::from_minor(0, GBP));

        Ok(())
    }

    #[test]
    fn scan_increments_quantity() -> TestResult {
        let catalog = test_catalog()?;
        let mut basket = Basket::new(&catalog);

        basket.scan("A");
        basket.scan("A");
        basket.scan("B");

        assert_eq!(basket.quantity("A"), 2);
        assert_eq!(basket.quantity("B"), 1);
        assert_eq!(basket.quantity("C"), 0);
        assert_eq!(basket.len(), 2);

        Ok(())
    }

    #[test]
    fn scan_accepts_items_missing_from_the_catalog() -> TestResult {
        let catalog = test_catalog()?;
        let mut basket = Basket::new(&catalog);

        basket.scan("Z");

        assert_eq!(basket.quantity("Z"), 1);

        Ok(())
    }

    #[test]
    fn total_sums_line_prices() -> TestResult {
        let catalog = test_catalog()?;
        let mut basket = Basket::new(&catalog);

        // A:3 prices as one multibuy group, B:1 at unit price.
        for item in ["A", "B", "A", "A"] {
            basket.scan(item);
        }

        assert_eq!(basket.total()?, Money::from_minor(160, GBP));

        Ok(())
    }

    #[test]
    fn total_is_idempotent() -> TestResult {
        let catalog = test_catalog()?;
        let mut basket = Basket::new(&catalog);

        basket.scan("A");
        basket.scan("C");

        let first = basket.total()?;
        let second = basket.total()?;

        assert_eq!(first, second);
        assert_eq!(first, Money::from_minor(70, GBP));

        Ok(())
    }

    #[test]
    fn total_ignores_scan_order() -> TestResult {
        let catalog = test_catalog()?;

        let mut forward = Basket::new(&catalog);
        let mut backward = Basket::new(&catalog);

        for item in ["A", "A", "B", "C"] {
            forward.scan(item);
        }
        for item in ["C", "B", "A", "A"] {
            backward.scan(item);
        }

        assert_eq!(forward.total()?, backward.total()?);

        Ok(())
    }

    #[test]
    fn total_with_unknown_item_returns_error() -> TestResult {
        let catalog = test_catalog()?;
        let mut basket = Basket::new(&catalog);

        basket.scan("A");
        basket.scan("Z");

        let result = basket.total();

        assert!(matches!(
            result,
            Err(TotalError::Catalog(CatalogError::UnknownItem(item))) if item == "Z"
        ));

        Ok(())
    }

    #[test]
    fn catalog_accessor_returns_bound_catalog() -> TestResult {
        let catalog = test_catalog()?;
        let basket = Basket::new(&catalog);

        assert_eq!(basket.catalog().len(), 3);

        Ok(())
    }
}
