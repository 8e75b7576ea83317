//! Utils

use std::path::PathBuf;

use clap::Parser;

/// Arguments for the checkout demo
#[derive(Debug, Parser)]
pub struct DemoCheckoutArgs {
    /// Path to the catalog configuration file
    #[clap(short, long, default_value = "demos/catalog.yml")]
    pub catalog: PathBuf,

    /// Item identifiers to scan, in order
    pub items: Vec<String>,
}
