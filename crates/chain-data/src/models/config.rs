use serde::{Deserialize, Serialize};

/// One bonding-eligible token as listed in the chain configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondingTokenConfig {
    /// Token symbol (e.g. "ampWHALE")
    pub symbol: String,
}

/// Per-chain bonding configuration.
///
/// Loaded by the config provider for a (network, chain id) pair. The field
/// names match the published JSON configuration files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Network name (e.g. "mainnet")
    pub network: String,

    /// Chain identifier (e.g. "migaloo-1")
    pub chain_id: String,

    /// Tokens eligible for bonding on this chain, in display order
    #[serde(default)]
    pub bonding_tokens: Vec<BondingTokenConfig>,
}

impl ChainConfig {
    /// Create a configuration with the given bonding token symbols.
    pub fn new(
        network: impl Into<String>,
        chain_id: impl Into<String>,
        symbols: &[&str],
    ) -> Self {
        Self {
            network: network.into(),
            chain_id: chain_id.into(),
            bonding_tokens: symbols
                .iter()
                .map(|s| BondingTokenConfig {
                    symbol: (*s).to_string(),
                })
                .collect(),
        }
    }

    /// Symbols of the configured bonding tokens, in configuration order.
    pub fn bonding_symbols(&self) -> impl Iterator<Item = &str> {
        self.bonding_tokens.iter().map(|t| t.symbol.as_str())
    }
}
