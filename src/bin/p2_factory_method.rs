//! Pattern 2: Factory Method
//! Six creators, six notification channels.
//!
//! Run with: cargo run --bin p2_factory_method

use pattern_catalog::{catalog, logging, CatalogConfig, Result};

fn main() -> Result<()> {
    let config = CatalogConfig::from_env()?;
    logging::init(&config.log_filter);
    catalog::print(&catalog::FACTORY_METHOD, &config)
}
