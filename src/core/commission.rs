//! Commission resolution.
//!
//! Picks the SAWA and office percentages for a booking. The first matching
//! rule wins:
//!
//! 1. explicit overrides (field by field, missing fields use the host type's
//!    table entry)
//! 2. an agency's own profile defaults
//! 3. the agency table entry
//! 4. the freelancer table entry

use crate::domain::model::{AgencyDefaults, CommissionOverrides, CommissionRates, HostType};
use serde::{Deserialize, Serialize};

pub const AGENCY_DEFAULT_RATES: CommissionRates = CommissionRates::new(28.0, 7.0);
pub const FREELANCER_DEFAULT_RATES: CommissionRates = CommissionRates::new(35.0, 0.0);

/// Fallback rates per host type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommissionTable {
    pub agency: CommissionRates,
    pub freelancer: CommissionRates,
}

impl Default for CommissionTable {
    fn default() -> Self {
        Self {
            agency: AGENCY_DEFAULT_RATES,
            freelancer: FREELANCER_DEFAULT_RATES,
        }
    }
}

impl CommissionTable {
    pub fn rates_for(&self, host_type: HostType) -> CommissionRates {
        match host_type {
            HostType::Agency => self.agency,
            HostType::Freelancer => self.freelancer,
        }
    }
}

/// How an override value of zero is treated when deciding whether the
/// override rule applies at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroOverridePolicy {
    /// Overrides only apply when at least one value is non-zero. An override
    /// set consisting solely of zeros falls through to the defaults.
    #[default]
    FallBack,
    /// Overrides apply whenever any value is present, so `0` is a real
    /// zero-percent commission.
    Honor,
}

impl ZeroOverridePolicy {
    fn activates(self, overrides: &CommissionOverrides) -> bool {
        let values = [overrides.sawa_percent, overrides.office_percent];
        match self {
            ZeroOverridePolicy::FallBack => values.iter().flatten().any(|v| *v != 0.0),
            ZeroOverridePolicy::Honor => values.iter().any(Option::is_some),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CommissionPolicy {
    pub table: CommissionTable,
    pub zero_overrides: ZeroOverridePolicy,
}

impl CommissionPolicy {
    pub fn new(table: CommissionTable, zero_overrides: ZeroOverridePolicy) -> Self {
        Self {
            table,
            zero_overrides,
        }
    }

    pub fn resolve(
        &self,
        host_type: HostType,
        overrides: Option<&CommissionOverrides>,
        agency_defaults: Option<&AgencyDefaults>,
    ) -> CommissionRates {
        let fallback = self.table.rates_for(host_type);

        if let Some(overrides) = overrides.map(CommissionOverrides::sanitized) {
            if self.zero_overrides.activates(&overrides) {
                return CommissionRates::new(
                    overrides.sawa_percent.unwrap_or(fallback.sawa_percent),
                    overrides.office_percent.unwrap_or(fallback.office_percent),
                );
            }
        }

        if host_type.is_agency() {
            if let Some(defaults) = agency_defaults.map(AgencyDefaults::sanitized) {
                return CommissionRates::new(
                    defaults.commission_sawa_default.unwrap_or(fallback.sawa_percent),
                    defaults
                        .commission_office_default
                        .unwrap_or(fallback.office_percent),
                );
            }
        }

        fallback
    }
}

/// Resolves rates with the built-in commission table and the default zero
/// handling.
pub fn resolve_commission(
    host_type: HostType,
    overrides: Option<&CommissionOverrides>,
    agency_defaults: Option<&AgencyDefaults>,
) -> CommissionRates {
    CommissionPolicy::default().resolve(host_type, overrides, agency_defaults)
}
