//! Builder: a director drives a builder through a fixed sequence of steps.
//!
//! Run with: cargo run --bin p4_builder

use std::mem;

use tracing::debug;

/// The complex value under construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Product {
    parts: Vec<String>,
}

impl Product {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn show(&self) -> String {
        format!("Product Parts: {:?}", self.parts)
    }
}

pub trait ProductBuilder {
    fn reset(&mut self);
    fn build_part_a(&mut self);
    fn build_part_b(&mut self);

    /// Hand over the finished product; the builder starts over empty.
    fn get_result(&mut self) -> Product;
}

#[derive(Debug, Default)]
pub struct ConcreteBuilder {
    product: Product,
}

impl ConcreteBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductBuilder for ConcreteBuilder {
    fn reset(&mut self) {
        self.product = Product::new();
    }

    fn build_part_a(&mut self) {
        self.product.add("PartA");
    }

    fn build_part_b(&mut self) {
        self.product.add("PartB");
    }

    fn get_result(&mut self) -> Product {
        let product = mem::take(&mut self.product);
        debug!(parts = product.parts.len(), "builder handed over product");
        product
    }
}

/// Knows the order of the steps, not what they produce.
pub struct Director<'a, B: ProductBuilder + ?Sized> {
    builder: &'a mut B,
}

impl<'a, B: ProductBuilder + ?Sized> Director<'a, B> {
    pub fn new(builder: &'a mut B) -> Self {
        Self { builder }
    }

    pub fn construct(&mut self) {
        self.builder.build_part_a();
        self.builder.build_part_b();
    }

    pub fn construct_minimal(&mut self) {
        self.builder.build_part_a();
    }
}

pub fn demo() -> Vec<String> {
    let mut builder = ConcreteBuilder::new();
    Director::new(&mut builder).construct();
    let product = builder.get_result();
    vec![product.show()]
}

// ============================================================================
// Tests
// ============================================================================
