//! Pricing rules

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

/// Errors raised when constructing a pricing rule.
#[derive(Debug, Error, PartialEq)]
pub enum RuleError {
    /// A multibuy offer must group at least one unit.
    #[error("multibuy quantity must be at least 1")]
    ZeroMultibuyQuantity,

    /// A rule with neither a unit price nor a multibuy prices everything at
    /// zero, which is almost certainly a configuration mistake.
    #[error("rule has neither a unit price nor a multibuy offer")]
    EmptyRule,
}

/// A multibuy offer: every complete group of `quantity` units is charged
/// `price` instead of `quantity` times the unit price.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Multibuy<'a> {
    quantity: u32,
    price: Money<'a, Currency>,
}

impl<'a> Multibuy<'a> {
    /// Create a multibuy offer of `quantity` units for `price`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::ZeroMultibuyQuantity`] if `quantity` is zero.
    pub fn new(quantity: u32, price: Money<'a, Currency>) -> Result<Self, RuleError> {
        if quantity == 0 {
            return Err(RuleError::ZeroMultibuyQuantity);
        }

        Ok(Multibuy { quantity, price })
    }

    /// Number of units in one complete group.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price charged for each complete group.
    #[must_use]
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }
}

/// How a single item identifier is priced.
///
/// At least one of the two parts is always present: units outside a complete
/// multibuy group are charged the unit price (or nothing, for a rule that
/// only defines a multibuy).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PricingRule<'a> {
    unit_price: Option<Money<'a, Currency>>,
    multibuy: Option<Multibuy<'a>>,
}

impl<'a> PricingRule<'a> {
    /// Create a rule from its optional parts.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::EmptyRule`] if both parts are absent.
    pub fn new(
        unit_price: Option<Money<'a, Currency>>,
        multibuy: Option<Multibuy<'a>>,
    ) -> Result<Self, RuleError> {
        if unit_price.is_none() && multibuy.is_none() {
            return Err(RuleError::EmptyRule);
        }

        Ok(PricingRule {
            unit_price,
            multibuy,
        })
    }

    /// Create a rule that only charges a flat unit price.
    #[must_use]
    pub fn unit(price: Money<'a, Currency>) -> Self {
        PricingRule {
            unit_price: Some(price),
            multibuy: None,
        }
    }

    /// Create a rule with a unit price and a multibuy offer.
    #[must_use]
    pub fn unit_with_multibuy(price: Money<'a, Currency>, multibuy: Multibuy<'a>) -> Self {
        PricingRule {
            unit_price: Some(price),
            multibuy: Some(multibuy),
        }
    }

    /// The flat price per unit, if the rule defines one.
    #[must_use]
    pub fn unit_price(&self) -> Option<&Money<'a, Currency>> {
        self.unit_price.as_ref()
    }

    /// The multibuy offer, if the rule defines one.
    #[must_use]
    pub fn multibuy(&self) -> Option<&Multibuy<'a>> {
        self.multibuy.as_ref()
    }

    /// The currency the rule's prices are expressed in.
    #[must_use]
    pub(crate) fn currency(&self) -> &'a Currency {
        match (&self.unit_price, &self.multibuy) {
            (Some(price), _) => price.currency(),
            (None, Some(multibuy)) => multibuy.price.currency(),
            (None, None) => unreachable!("constructors require at least one part"),
        }
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{GBP, USD};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn multibuy_rejects_zero_quantity() {
        let result = Multibuy::new(0, Money::from_minor(130, GBP));

        assert!(matches!(result, Err(RuleError::ZeroMultibuyQuantity)));
    }

    #[test]
    fn multibuy_exposes_quantity_and_price() -> TestResult {
        let multibuy = Multibuy::new(3, Money::from_minor(130, GBP))?;

        assert_eq!(multibuy.quantity(), 3);
        assert_eq!(multibuy.price(), &Money::from_minor(130, GBP));

        Ok(())
    }

    #[test]
    fn rule_with_neither_part_is_rejected() {
        let result = PricingRule::new(None, None);

        assert!(matches!(result, Err(RuleError::EmptyRule)));
    }

    #[test]
    fn rule_with_only_multibuy_is_valid() -> TestResult {
        let multibuy = Multibuy::new(2, Money::from_minor(45, GBP))?;
        let rule = PricingRule::new(None, Some(multibuy))?;

        assert!(rule.unit_price().is_none());
        assert_eq!(rule.multibuy(), Some(&multibuy));
        assert_eq!(rule.currency(), GBP);

        Ok(())
    }

    #[test]
    fn unit_rule_has_no_multibuy() {
        let rule = PricingRule::unit(Money::from_minor(20, USD));

        assert_eq!(rule.unit_price(), Some(&Money::from_minor(20, USD)));
        assert!(rule.multibuy().is_none());
        assert_eq!(rule.currency(), USD);
    }

    #[test]
    fn unit_with_multibuy_keeps_both_parts() -> TestResult {
        let multibuy = Multibuy::new(3, Money::from_minor(130, GBP))?;
        let rule = PricingRule::unit_with_multibuy(Money::from_minor(50, GBP), multibuy);

        assert_eq!(rule.unit_price(), Some(&Money::from_minor(50, GBP)));
        assert_eq!(rule.multibuy(), Some(&multibuy));

        Ok(())
    }
}
