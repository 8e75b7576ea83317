//! Price computation

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::rules::PricingRule;

/// Errors that can occur while pricing one basket line.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// The computed price does not fit in the minor-unit range.
    #[error("line price overflows the representable minor-unit range")]
    Overflow,
}

/// Calculates the price of `quantity` units under `rule`.
///
/// Every complete multibuy group is charged the group price; leftover units
/// (or all units, for a rule without a multibuy offer) are charged the unit
/// price. A rule that defines only a multibuy charges nothing for leftover
/// units. Arithmetic is carried out in integer minor units, so repeated
/// totals accumulate no floating error.
///
/// Pure function of `(rule, quantity)`; safe to call concurrently.
///
/// # Errors
///
/// - [`PricingError::Overflow`]: the price exceeds the minor-unit range.
pub fn line_price<'a>(
    rule: &PricingRule<'a>,
    quantity: u32,
) -> Result<Money<'a, Currency>, PricingError> {
    let unit_minor = rule.unit_price().map_or(0, Money::to_minor_units);

    let minor = match rule.multibuy() {
        Some(multibuy) => {
            let groups = i64::from(quantity / multibuy.quantity());
            let leftover = i64::from(quantity % multibuy.quantity());

            let grouped = groups
                .checked_mul(multibuy.price().to_minor_units())
                .ok_or(PricingError::Overflow)?;

            let loose = leftover
                .checked_mul(unit_minor)
                .ok_or(PricingError::Overflow)?;

            grouped.checked_add(loose).ok_or(PricingError::Overflow)?
        }
        None => i64::from(quantity)
            .checked_mul(unit_minor)
            .ok_or(PricingError::Overflow)?,
    };

    Ok(Money::from_minor(minor, rule.currency()))
}
