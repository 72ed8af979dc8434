//! Portfolio aggregation module - categories, snapshot model, normalizers,
//! and the pure recompute step that merges the four category inputs.

mod aggregator;
mod category;
mod normalizer;
mod portfolio_model;

pub use aggregator::*;
pub use category::*;
pub use normalizer::*;
pub use portfolio_model::*;

#[cfg(test)]
mod normalizer_tests;
