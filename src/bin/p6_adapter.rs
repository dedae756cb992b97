//! Pattern 6: Adapter
//! Exchange rates come from `PATTERN_CATALOG_CONFIG` when it is set.
//!
//! Run with: cargo run --bin p6_adapter

use pattern_catalog::{catalog, logging, CatalogConfig, Result};

fn main() -> Result<()> {
    let config = CatalogConfig::from_env()?;
    logging::init(&config.log_filter);
    catalog::print(&catalog::ADAPTER, &config)
}
