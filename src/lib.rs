//! Till
//!
//! Till is a checkout pricing engine: scanned items accumulate in a basket
//! and are priced against an immutable catalog of per-item rules, including
//! "N for a fixed price" multibuy offers.

pub mod basket;
pub mod catalog;
pub mod config;
pub mod prelude;
pub mod pricing;
pub mod rules;
pub mod utils;
