//! # Creational & Structural Pattern Catalog
//!
//! Runnable, self-contained demonstrations of six classic design patterns.
//!
//! ## Patterns Covered
//!
//! 1. **Singleton** - one lazily built instance per type (double-checked locking)
//! 2. **Factory Method** - creators decide which notification channel to build
//! 3. **Abstract Factory** - families of platform widgets
//! 4. **Builder** - a director drives a builder through ordered steps
//! 5. **Prototype** - a registry of deep-cloned, customizable templates
//! 6. **Adapter** - a multi-currency payer behind a USD-only interface
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin p1_singleton
//! cargo run --bin p2_factory_method
//! cargo run --bin p3_abstract_factory
//! cargo run --bin p4_builder
//! cargo run --bin p5_prototype
//! cargo run --bin p6_adapter
//!
//! # Everything, in order
//! cargo run --bin catalog
//! ```
//!
//! Set `PATTERN_CATALOG_CONFIG` to a TOML file to change the log filter or the
//! adapter's exchange rates (see [`config`]). `RUST_LOG` overrides the filter.
//! The adapter's "Converted ..." notes are logged at `info` on stderr, which
//! the default filter shows.
//!
//! ## Key Dependencies
//!
//! - `thiserror` - the [`PatternError`] type
//! - `tracing` / `tracing-subscriber` - diagnostics on stderr
//! - `serde` / `toml` - configuration
//! - `serde_json` - free-form prototype attributes
//! - `lazy_static` - the singleton instance table
//! - `colored` - demo headings

pub mod abstract_factory;
pub mod adapter;
pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;
pub mod factory_method;
pub mod logging;
pub mod prototype;
pub mod singleton;

pub use config::CatalogConfig;
pub use error::{PatternError, Result};
