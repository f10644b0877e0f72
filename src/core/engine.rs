use crate::core::calculator::BasePrice;
use crate::core::commission::CommissionPolicy;
use crate::core::formatter::{format_price_breakdown, DEFAULT_CURRENCY_SYMBOL};
use crate::domain::model::{
    AgencyDefaults, CommissionOverrides, CommissionRates, HostType, PriceBreakdown, QuoteRequest,
};
use crate::domain::ports::PolicyProvider;

/// Stateless pricing facade. Every call is independent of the others.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingEngine {
    policy: CommissionPolicy,
    currency_symbol: String,
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(CommissionPolicy::default())
    }
}

impl PricingEngine {
    pub fn new(policy: CommissionPolicy) -> Self {
        Self {
            policy,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }

    pub fn from_provider<P: PolicyProvider + ?Sized>(provider: &P) -> Self {
        Self::new(provider.commission_policy()).with_currency(provider.currency_symbol())
    }

    pub fn with_currency(mut self, currency_symbol: impl Into<String>) -> Self {
        self.currency_symbol = currency_symbol.into();
        self
    }

    pub fn policy(&self) -> &CommissionPolicy {
        &self.policy
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn resolve(
        &self,
        host_type: HostType,
        overrides: Option<&CommissionOverrides>,
        agency_defaults: Option<&AgencyDefaults>,
    ) -> CommissionRates {
        let rates = self.policy.resolve(host_type, overrides, agency_defaults);
        tracing::debug!(
            "Resolved commission for {}: SAWA {}%, office {}%",
            host_type,
            rates.sawa_percent,
            rates.office_percent
        );
        rates
    }

    pub fn quote(&self, request: &QuoteRequest) -> PriceBreakdown {
        let base = BasePrice::from(&request.base_price);
        if base.value() == 0.0 && !request.base_price.is_number() {
            tracing::debug!("Base price {:?} treated as 0", request.base_price);
        }

        let breakdown = self.policy.calculate(
            base,
            request.host_type,
            request.overrides.as_ref(),
            request.agency_defaults.as_ref(),
        );
        let rates = breakdown.rates();
        tracing::debug!(
            "Quoted {} booking: base {:.2} at SAWA {}% / office {}%, total {:.2}",
            request.host_type,
            breakdown.base_price,
            rates.sawa_percent,
            rates.office_percent,
            breakdown.total
        );
        breakdown
    }

    pub fn format(&self, breakdown: &PriceBreakdown) -> String {
        format_price_breakdown(Some(breakdown), Some(&self.currency_symbol))
    }
}
