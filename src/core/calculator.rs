//! Final price calculation.

use crate::core::commission::{resolve_commission, CommissionPolicy};
use crate::domain::model::{AgencyDefaults, CommissionOverrides, HostType, PriceBreakdown};
use regex::Regex;
use std::sync::OnceLock;

/// A base price as it arrives from upstream data. Anything that does not
/// read as a finite number becomes `0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BasePrice(f64);

impl BasePrice {
    pub fn value(self) -> f64 {
        self.0
    }

    /// 解析字串開頭的數字，例如 "12.5 USD" -> 12.5，無法解析時為 0
    pub fn parse_lenient(raw: &str) -> Self {
        leading_number()
            .find(raw)
            .and_then(|m| m.as_str().trim_start().parse::<f64>().ok())
            .into()
    }
}

impl From<f64> for BasePrice {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            BasePrice(value)
        } else {
            BasePrice(0.0)
        }
    }
}

impl From<i64> for BasePrice {
    fn from(value: i64) -> Self {
        BasePrice::from(value as f64)
    }
}

impl From<Option<f64>> for BasePrice {
    fn from(value: Option<f64>) -> Self {
        value.map(BasePrice::from).unwrap_or_default()
    }
}

impl From<&str> for BasePrice {
    fn from(raw: &str) -> Self {
        BasePrice::parse_lenient(raw)
    }
}

impl From<&String> for BasePrice {
    fn from(raw: &String) -> Self {
        BasePrice::parse_lenient(raw)
    }
}

impl From<String> for BasePrice {
    fn from(raw: String) -> Self {
        BasePrice::parse_lenient(&raw)
    }
}

impl From<&serde_json::Value> for BasePrice {
    fn from(raw: &serde_json::Value) -> Self {
        match raw {
            serde_json::Value::Number(n) => n.as_f64().into(),
            serde_json::Value::String(s) => BasePrice::parse_lenient(s),
            _ => BasePrice::default(),
        }
    }
}

fn leading_number() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?")
            .expect("leading number pattern is valid")
    })
}

/// Rounds to two decimals, half away from zero. Never returns `-0.0`.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}

/// Percentage of `base`, rounded to cents.
pub fn fee_for(base: f64, percent: f64) -> f64 {
    round2(base * percent / 100.0)
}

impl CommissionPolicy {
    pub fn calculate(
        &self,
        base_price: impl Into<BasePrice>,
        host_type: HostType,
        overrides: Option<&CommissionOverrides>,
        agency_defaults: Option<&AgencyDefaults>,
    ) -> PriceBreakdown {
        let base = base_price.into().value();
        let rates = self.resolve(host_type, overrides, agency_defaults);
        breakdown_for(base, rates.sawa_percent, rates.office_percent)
    }
}

/// Prices a booking with the built-in commission table.
pub fn calculate_final_price(
    base_price: impl Into<BasePrice>,
    host_type: HostType,
    overrides: Option<&CommissionOverrides>,
    agency_defaults: Option<&AgencyDefaults>,
) -> PriceBreakdown {
    let base = base_price.into().value();
    let rates = resolve_commission(host_type, overrides, agency_defaults);
    breakdown_for(base, rates.sawa_percent, rates.office_percent)
}

fn breakdown_for(base: f64, sawa_percent: f64, office_percent: f64) -> PriceBreakdown {
    // Both fees come from the unrounded base.
    let sawa_fee = fee_for(base, sawa_percent);
    let office_fee = fee_for(base, office_percent);

    PriceBreakdown {
        base_price: base,
        sawa_percent,
        sawa_fee,
        office_percent,
        office_fee,
        total: round2(base + sawa_fee + office_fee),
    }
}
