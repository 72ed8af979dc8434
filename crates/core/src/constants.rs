/// Symbol of the protocol's reference token.
///
/// The resolved symbol set always contains this symbol, whether or not the
/// chain configuration lists it.
pub const REFERENCE_TOKEN_SYMBOL: &str = "WHALE";
