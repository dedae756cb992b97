//! The six demos, in the order the catalog presents them.

use colored::Colorize;

use crate::config::CatalogConfig;
use crate::error::Result;
use crate::{abstract_factory, adapter, builder, factory_method, prototype, singleton};

pub struct Demo {
    pub bin: &'static str,
    pub title: &'static str,
    run: fn(&CatalogConfig) -> Result<Vec<String>>,
}

impl Demo {
    pub fn run(&self, config: &CatalogConfig) -> Result<Vec<String>> {
        (self.run)(config)
    }
}

fn run_singleton(_: &CatalogConfig) -> Result<Vec<String>> {
    Ok(singleton::demo())
}

fn run_factory_method(_: &CatalogConfig) -> Result<Vec<String>> {
    Ok(factory_method::demo())
}

fn run_abstract_factory(_: &CatalogConfig) -> Result<Vec<String>> {
    Ok(abstract_factory::demo())
}

fn run_builder(_: &CatalogConfig) -> Result<Vec<String>> {
    Ok(builder::demo())
}

fn run_prototype(_: &CatalogConfig) -> Result<Vec<String>> {
    prototype::demo()
}

fn run_adapter(config: &CatalogConfig) -> Result<Vec<String>> {
    Ok(adapter::demo(&config.exchange_rates))
}

pub static SINGLETON: Demo = Demo {
    bin: "p1_singleton",
    title: "Singleton",
    run: run_singleton,
};

pub static FACTORY_METHOD: Demo = Demo {
    bin: "p2_factory_method",
    title: "Factory Method",
    run: run_factory_method,
};

pub static ABSTRACT_FACTORY: Demo = Demo {
    bin: "p3_abstract_factory",
    title: "Abstract Factory",
    run: run_abstract_factory,
};

pub static BUILDER: Demo = Demo {
    bin: "p4_builder",
    title: "Builder",
    run: run_builder,
};

pub static PROTOTYPE: Demo = Demo {
    bin: "p5_prototype",
    title: "Prototype",
    run: run_prototype,
};

pub static ADAPTER: Demo = Demo {
    bin: "p6_adapter",
    title: "Adapter",
    run: run_adapter,
};

pub static ALL: [&Demo; 6] = [
    &SINGLETON,
    &FACTORY_METHOD,
    &ABSTRACT_FACTORY,
    &BUILDER,
    &PROTOTYPE,
    &ADAPTER,
];

/// Look a demo up by binary name (`p4_builder`) or title (`builder`).
pub fn find(name: &str) -> Option<&'static Demo> {
    ALL.iter().copied().find(|demo| {
        demo.bin == name || demo.title.eq_ignore_ascii_case(name)
    })
}

/// Run one demo and print its heading and lines to stdout.
pub fn print(demo: &Demo, config: &CatalogConfig) -> Result<()> {
    println!("{}", format!("=== {} Pattern ===", demo.title).bold().cyan());
    for line in demo.run(config)? {
        println!("{}", line);
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
