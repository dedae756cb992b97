//! Pattern 4: Builder
//!
//! Run with: cargo run --bin p4_builder

use pattern_catalog::{catalog, logging, CatalogConfig, Result};

fn main() -> Result<()> {
    let config = CatalogConfig::from_env()?;
    logging::init(&config.log_filter);
    catalog::print(&catalog::BUILDER, &config)
}
