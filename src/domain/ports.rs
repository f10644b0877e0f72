use crate::core::commission::CommissionPolicy;

/// Source of the pricing settings an engine is built from.
pub trait PolicyProvider: Send + Sync {
    fn commission_policy(&self) -> CommissionPolicy;
    fn currency_symbol(&self) -> &str;
}
