/// Wallet connection state as reported by the session provider.
///
/// A connected session always carries the account address; there is no
/// "connected without address" state.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum WalletSession {
    /// No wallet is connected.
    #[default]
    Disconnected,

    /// A wallet is connected for the given account address.
    Connected {
        /// The connected account address
        address: String,
    },
}

impl WalletSession {
    /// Create a connected session for the given address.
    pub fn connected(address: impl Into<String>) -> Self {
        Self::Connected {
            address: address.into(),
        }
    }

    /// Returns true when a wallet is connected.
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected { .. })
    }

    /// Returns the connected account address, if any.
    pub fn address(&self) -> Option<&str> {
        match self {
            Self::Connected { address } => Some(address.as_str()),
            Self::Disconnected => None,
        }
    }
}
