use crate::core::commission::CommissionTable;
use crate::domain::model::{AgencyDefaults, CommissionOverrides, CommissionRates};
use crate::utils::error::{PricingError, Result};

pub const MIN_PERCENT: f64 = 0.0;
pub const MAX_PERCENT: f64 = 100.0;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PricingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PricingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 百分比必須是有限數值且介於 0 到 100
pub fn validate_percent(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(PricingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    validate_range(field_name, value, MIN_PERCENT, MAX_PERCENT)
}

fn validate_optional_percent(field_name: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(v) => validate_percent(field_name, v),
        None => Ok(()),
    }
}

pub fn validate_rates(prefix: &str, rates: &CommissionRates) -> Result<()> {
    validate_percent(&format!("{}.sawa_percent", prefix), rates.sawa_percent)?;
    validate_percent(&format!("{}.office_percent", prefix), rates.office_percent)
}

pub fn validate_overrides(overrides: &CommissionOverrides) -> Result<()> {
    validate_optional_percent("overrides.sawa_percent", overrides.sawa_percent)?;
    validate_optional_percent("overrides.office_percent", overrides.office_percent)
}

pub fn validate_agency_defaults(defaults: &AgencyDefaults) -> Result<()> {
    validate_optional_percent(
        "agency_defaults.commission_sawa_default",
        defaults.commission_sawa_default,
    )?;
    validate_optional_percent(
        "agency_defaults.commission_office_default",
        defaults.commission_office_default,
    )
}

impl Validate for CommissionOverrides {
    fn validate(&self) -> Result<()> {
        validate_overrides(self)
    }
}

impl Validate for AgencyDefaults {
    fn validate(&self) -> Result<()> {
        validate_agency_defaults(self)
    }
}

impl Validate for CommissionTable {
    fn validate(&self) -> Result<()> {
        validate_rates("commission.agency", &self.agency)?;
        validate_rates("commission.freelancer", &self.freelancer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_percent() {
        assert!(validate_percent("sawa", 0.0).is_ok());
        assert!(validate_percent("sawa", 100.0).is_ok());
        assert!(validate_percent("sawa", 28.5).is_ok());
        assert!(validate_percent("sawa", -1.0).is_err());
        assert!(validate_percent("sawa", 100.01).is_err());
        assert!(validate_percent("sawa", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_overrides_names_field() {
        let err = CommissionOverrides::new(Some(10.0), Some(150.0))
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("overrides.office_percent"));
        assert!(CommissionOverrides::default().validate().is_ok());
    }

    #[test]
    fn test_validate_agency_defaults() {
        assert!(AgencyDefaults::new(Some(20.0), None).validate().is_ok());
        assert!(AgencyDefaults::new(Some(-5.0), None).validate().is_err());
    }

    #[test]
    fn test_validate_default_table() {
        assert!(CommissionTable::default().validate().is_ok());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("display.currency_symbol", "$").is_ok());
        assert!(validate_non_empty_string("display.currency_symbol", "  ").is_err());
    }
}
