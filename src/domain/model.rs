use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of host offering a service. Anything that is not recognisably an
/// agency prices as a freelancer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostType {
    Agency,
    #[default]
    #[serde(other)]
    Freelancer,
}

impl HostType {
    /// 寬鬆解析：只有 "agency" 會被視為代理商
    pub fn parse_lenient(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("agency") {
            HostType::Agency
        } else {
            HostType::Freelancer
        }
    }

    pub fn is_agency(self) -> bool {
        matches!(self, HostType::Agency)
    }
}

impl From<&str> for HostType {
    fn from(raw: &str) -> Self {
        Self::parse_lenient(raw)
    }
}

impl From<Option<&str>> for HostType {
    fn from(raw: Option<&str>) -> Self {
        raw.map(Self::parse_lenient).unwrap_or_default()
    }
}

impl fmt::Display for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostType::Agency => f.write_str("agency"),
            HostType::Freelancer => f.write_str("freelancer"),
        }
    }
}

/// Per-booking or per-host commission overrides.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sawa_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office_percent: Option<f64>,
}

impl CommissionOverrides {
    pub fn new(sawa_percent: Option<f64>, office_percent: Option<f64>) -> Self {
        Self {
            sawa_percent,
            office_percent,
        }
    }

    /// Override fields with NaN or infinite values dropped.
    pub fn sanitized(&self) -> Self {
        Self {
            sawa_percent: finite(self.sawa_percent),
            office_percent: finite(self.office_percent),
        }
    }
}

/// Commission defaults stored on an agency's host profile.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgencyDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission_sawa_default: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission_office_default: Option<f64>,
}

impl AgencyDefaults {
    pub fn new(commission_sawa_default: Option<f64>, commission_office_default: Option<f64>) -> Self {
        Self {
            commission_sawa_default,
            commission_office_default,
        }
    }

    pub fn sanitized(&self) -> Self {
        Self {
            commission_sawa_default: finite(self.commission_sawa_default),
            commission_office_default: finite(self.commission_office_default),
        }
    }
}

/// Resolved commission percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionRates {
    pub sawa_percent: f64,
    pub office_percent: f64,
}

impl CommissionRates {
    pub const fn new(sawa_percent: f64, office_percent: f64) -> Self {
        Self {
            sawa_percent,
            office_percent,
        }
    }
}

/// Itemised result of applying commission rates to a base price.
///
/// `total` always equals `round2(base_price + sawa_fee + office_fee)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub base_price: f64,
    pub sawa_percent: f64,
    pub sawa_fee: f64,
    pub office_percent: f64,
    pub office_fee: f64,
    pub total: f64,
}

impl PriceBreakdown {
    pub fn rates(&self) -> CommissionRates {
        CommissionRates::new(self.sawa_percent, self.office_percent)
    }

    pub fn has_office_line(&self) -> bool {
        self.office_percent > 0.0
    }
}

impl fmt::Display for PriceBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::core::formatter::format_price_breakdown(Some(self), None))
    }
}

/// Everything needed to price one booking.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(default)]
    pub base_price: serde_json::Value,
    #[serde(default)]
    pub host_type: HostType,
    #[serde(default)]
    pub overrides: Option<CommissionOverrides>,
    #[serde(default)]
    pub agency_defaults: Option<AgencyDefaults>,
}

impl QuoteRequest {
    pub fn new(base_price: f64, host_type: HostType) -> Self {
        Self {
            base_price: serde_json::Value::from(base_price),
            host_type,
            overrides: None,
            agency_defaults: None,
        }
    }

    pub fn with_overrides(mut self, overrides: CommissionOverrides) -> Self {
        self.overrides = Some(overrides);
        self
    }

    pub fn with_agency_defaults(mut self, defaults: AgencyDefaults) -> Self {
        self.agency_defaults = Some(defaults);
        self
    }
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
