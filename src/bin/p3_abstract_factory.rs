//! Pattern 3: Abstract Factory
//!
//! Run with: cargo run --bin p3_abstract_factory

use pattern_catalog::{catalog, logging, CatalogConfig, Result};

fn main() -> Result<()> {
    let config = CatalogConfig::from_env()?;
    logging::init(&config.log_filter);
    catalog::print(&catalog::ABSTRACT_FACTORY, &config)
}
