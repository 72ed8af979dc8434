//! Symbol set resolution module.
//!
//! Derives the set of token symbols the dashboard tracks from the chain
//! configuration: the configured bonding tokens plus the reference token.

mod symbol_resolver;

pub use symbol_resolver::*;
