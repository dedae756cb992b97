//! Pattern 5: Prototype
//! Clone registered vehicle templates and customize the copies.
//!
//! Run with: cargo run --bin p5_prototype

use pattern_catalog::{catalog, logging, CatalogConfig, Result};

fn main() -> Result<()> {
    let config = CatalogConfig::from_env()?;
    logging::init(&config.log_filter);
    catalog::print(&catalog::PROTOTYPE, &config)
}
