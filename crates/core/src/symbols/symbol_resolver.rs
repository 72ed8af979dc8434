use std::sync::Mutex;

use stakefolio_chain_data::ChainConfig;

use crate::constants::REFERENCE_TOKEN_SYMBOL;

/// Ordered set of token symbols the dashboard tracks.
///
/// Invariants, enforced by construction through [`resolve_symbol_set`]:
/// - each symbol appears exactly once, at its first occurrence position
/// - the reference symbol is always a member
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolSet {
    symbols: Vec<String>,
}

impl SymbolSet {
    /// The symbols in resolution order.
    pub fn as_slice(&self) -> &[String] {
        &self.symbols
    }

    /// Iterate the symbols in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }

    /// Returns true when the set contains the given symbol.
    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|s| s == symbol)
    }
}

impl Default for SymbolSet {
    fn default() -> Self {
        resolve_symbol_set(None)
    }
}

/// Derive the symbol set from the chain configuration.
///
/// Configured bonding tokens come first, in configuration order with
/// duplicates dropped after their first occurrence. The reference symbol is
/// appended last unless the configuration already lists it. An absent
/// configuration is treated as an empty token list, so the result is never
/// smaller than the reference symbol alone.
pub fn resolve_symbol_set(config: Option<&ChainConfig>) -> SymbolSet {
    let mut symbols: Vec<String> = Vec::new();
    if let Some(config) = config {
        for symbol in config.bonding_symbols() {
            if !symbols.iter().any(|s| s == symbol) {
                symbols.push(symbol.to_string());
            }
        }
    }
    if !symbols.iter().any(|s| s == REFERENCE_TOKEN_SYMBOL) {
        symbols.push(REFERENCE_TOKEN_SYMBOL.to_string());
    }
    SymbolSet { symbols }
}

/// Memoizing wrapper around [`resolve_symbol_set`].
///
/// Recomputes only when the configuration value changes; repeated calls with
/// an equal configuration return the cached set.
#[derive(Default)]
pub struct SymbolSetResolver {
    cache: Mutex<Option<(Option<ChainConfig>, SymbolSet)>>,
}

impl SymbolSetResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the symbol set for the given configuration.
    pub fn resolve(&self, config: Option<&ChainConfig>) -> SymbolSet {
        let mut cache = self.cache.lock().unwrap();
        if let Some((cached_config, cached_set)) = cache.as_ref() {
            if cached_config.as_ref() == config {
                return cached_set.clone();
            }
        }
        let set = resolve_symbol_set(config);
        *cache = Some((config.cloned(), set.clone()));
        set
    }
}
