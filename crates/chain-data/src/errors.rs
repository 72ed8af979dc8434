//! Error types for chain data sources.

use thiserror::Error;

/// Errors that can occur while a source fetches chain data.
///
/// A source failure never aborts aggregation; the core records it as a
/// settled-but-failed state for the affected category. The
/// [`is_transient`](Self::is_transient) classification tells callers
/// whether a later refresh may still succeed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// A network error occurred while communicating with the chain.
    /// Transient; a later refresh may succeed.
    #[error("Network error: {0}")]
    Network(String),

    /// The request to the source timed out.
    #[error("Timeout: {origin}")]
    Timeout {
        /// The source that timed out
        origin: String,
    },

    /// The source rate limited the request.
    #[error("Rate limited: {origin}")]
    RateLimited {
        /// The source that rate limited the request
        origin: String,
    },

    /// The query executed but the source reported a failure.
    /// Terminal for this refresh cycle.
    #[error("Query failed: {origin} - {message}")]
    Query {
        /// The source that returned the error
        origin: String,
        /// The error message from the source
        message: String,
    },

    /// The wallet address was rejected by the source.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// The source does not support the requested operation.
    #[error("Operation not supported: {operation} ({origin})")]
    NotSupported {
        /// The unsupported operation
        operation: String,
        /// The source that does not support it
        origin: String,
    },
}

impl SourceError {
    /// Returns true when the failure is transient and a later refresh of the
    /// same source may succeed without any change to the request.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_is_transient() {
        let error = SourceError::Network("connection refused".to_string());
        assert!(error.is_transient());
    }

    #[test]
    fn test_timeout_is_transient() {
        let error = SourceError::Timeout {
            origin: "BONDED".to_string(),
        };
        assert!(error.is_transient());
    }

    #[test]
    fn test_query_is_terminal() {
        let error = SourceError::Query {
            origin: "UNBONDING".to_string(),
            message: "contract query failed".to_string(),
        };
        assert!(!error.is_transient());
    }

    #[test]
    fn test_invalid_address_is_terminal() {
        let error = SourceError::InvalidAddress("not-bech32".to_string());
        assert!(!error.is_transient());
    }

    #[test]
    fn test_error_display() {
        let error = SourceError::Timeout {
            origin: "LIQUID".to_string(),
        };
        assert_eq!(format!("{}", error), "Timeout: LIQUID");

        let error = SourceError::Query {
            origin: "WITHDRAWABLE".to_string(),
            message: "out of gas".to_string(),
        };
        assert_eq!(format!("{}", error), "Query failed: WITHDRAWABLE - out of gas");
    }
}
