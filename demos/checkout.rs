//! Checkout Example
//!
//! Loads a catalog configuration, scans the given item identifiers in order
//! and prints the running total after every scan.
//!
//! Use `-c` to point at a different catalog file.
//! Pass item identifiers as positional arguments; with none given, the
//! example scans A B A A B C D.

use anyhow::Result;

use clap::Parser;
use till::{basket::Basket, config::CatalogConfig, utils::DemoCheckoutArgs};

/// Checkout Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = DemoCheckoutArgs::parse();

    let catalog = CatalogConfig::load(&args.catalog)?;
    let mut basket = Basket::new(&catalog);

    let items: Vec<String> = if args.items.is_empty() {
        ["A", "B", "A", "A", "B", "C", "D"]
            .into_iter()
            .map(String::from)
            .collect()
    } else {
        args.items
    };

    for item in items {
        basket.scan(item);

        println!("Running total: {}", basket.total()?);
    }

    Ok(())
}
