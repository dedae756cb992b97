//! Pattern 1: Singleton
//! Two lookups, one instance, shared updates.
//!
//! Run with: cargo run --bin p1_singleton

use pattern_catalog::{catalog, logging, CatalogConfig, Result};

fn main() -> Result<()> {
    let config = CatalogConfig::from_env()?;
    logging::init(&config.log_filter);
    catalog::print(&catalog::SINGLETON, &config)
}
