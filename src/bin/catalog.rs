//! Every pattern demo, one after another.
//!
//! Run with: cargo run --bin catalog

use colored::Colorize;
use pattern_catalog::{catalog, logging, CatalogConfig, Result};

fn main() -> Result<()> {
    let config = CatalogConfig::from_env()?;
    logging::init(&config.log_filter);

    println!("{}", "Creational & Structural Pattern Catalog".bold());
    println!("{}\n", "=======================================".bold());

    for demo in catalog::ALL {
        catalog::print(demo, &config)?;
        println!();
    }

    println!("{}", format!("Ran {} demos.", catalog::ALL.len()).green());
    Ok(())
}
