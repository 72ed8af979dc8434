use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One actively bonded position as returned by the bonding contract.
///
/// Fields are optional because chain queries can return partial records;
/// the aggregation core decides how to treat incomplete ones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BondedPosition {
    /// Symbol of the bonded token
    pub token_symbol: Option<String>,

    /// Bonded amount in display units
    pub amount: Option<Decimal>,
}

impl BondedPosition {
    /// Create a fully populated position.
    pub fn new(token_symbol: impl Into<String>, amount: Decimal) -> Self {
        Self {
            token_symbol: Some(token_symbol.into()),
            amount: Some(amount),
        }
    }
}

/// One pending unbonding request.
///
/// Each request is a distinct record even when several exist for the same
/// token; requests differ by their release time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnbondingRequest {
    /// Symbol of the unbonding token
    pub token_symbol: Option<String>,

    /// Amount being unbonded, in display units
    pub amount: Option<Decimal>,

    /// When the cooldown elapses and the amount becomes withdrawable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_at: Option<DateTime<Utc>>,
}

impl UnbondingRequest {
    /// Create a request without a known release time.
    pub fn new(token_symbol: impl Into<String>, amount: Decimal) -> Self {
        Self {
            token_symbol: Some(token_symbol.into()),
            amount: Some(amount),
            release_at: None,
        }
    }

    /// Create a request with a release time.
    pub fn releasing_at(
        token_symbol: impl Into<String>,
        amount: Decimal,
        release_at: DateTime<Utc>,
    ) -> Self {
        Self {
            token_symbol: Some(token_symbol.into()),
            amount: Some(amount),
            release_at: Some(release_at),
        }
    }
}

/// One claimable amount whose unbonding cooldown has elapsed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawableRecord {
    /// Symbol of the withdrawable token
    pub token_symbol: Option<String>,

    /// Claimable amount in display units
    pub amount: Option<Decimal>,
}

impl WithdrawableRecord {
    /// Create a fully populated record.
    pub fn new(token_symbol: impl Into<String>, amount: Decimal) -> Self {
        Self {
            token_symbol: Some(token_symbol.into()),
            amount: Some(amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_bonded_position_new() {
        let position = BondedPosition::new("ampWHALE", dec!(125.5));
        assert_eq!(position.token_symbol.as_deref(), Some("ampWHALE"));
        assert_eq!(position.amount, Some(dec!(125.5)));
    }

    #[test]
    fn test_records_deserialize_camel_case() {
        let json = r#"{ "tokenSymbol": "bWHALE", "amount": 42.0 }"#;
        let position: BondedPosition = serde_json::from_str(json).unwrap();
        assert_eq!(position.token_symbol.as_deref(), Some("bWHALE"));
        assert_eq!(position.amount, Some(dec!(42.0)));
    }

    #[test]
    fn test_records_tolerate_missing_fields() {
        let json = r#"{ "tokenSymbol": "WHALE" }"#;
        let record: WithdrawableRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.token_symbol.as_deref(), Some("WHALE"));
        assert_eq!(record.amount, None);
    }

    #[test]
    fn test_unbonding_release_time_is_optional() {
        let request = UnbondingRequest::new("WHALE", dec!(10));
        assert_eq!(request.release_at, None);

        let release = Utc::now();
        let request = UnbondingRequest::releasing_at("WHALE", dec!(10), release);
        assert_eq!(request.release_at, Some(release));
    }
}
