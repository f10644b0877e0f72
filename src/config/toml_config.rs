use crate::core::commission::{
    CommissionPolicy, CommissionTable, ZeroOverridePolicy, AGENCY_DEFAULT_RATES,
    FREELANCER_DEFAULT_RATES,
};
use crate::core::formatter::DEFAULT_CURRENCY_SYMBOL;
use crate::domain::model::CommissionRates;
use crate::domain::ports::PolicyProvider;
use crate::utils::error::{PricingError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "pricing.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub commission: CommissionConfig,
    pub policy: PolicyConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommissionConfig {
    pub agency: RatesConfig,
    pub freelancer: RatesConfig,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RatesConfig {
    pub sawa_percent: Option<f64>,
    pub office_percent: Option<f64>,
}

impl RatesConfig {
    fn or(&self, fallback: CommissionRates) -> CommissionRates {
        CommissionRates::new(
            self.sawa_percent.unwrap_or(fallback.sawa_percent),
            self.office_percent.unwrap_or(fallback.office_percent),
        )
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub zero_overrides: ZeroOverridePolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency_symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl PricingConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 檔案不存在時使用預設值
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(
                "No pricing config at {}, using built-in defaults",
                path.as_ref().display()
            );
            Ok(Self::default())
        }
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${SAWA_AGENCY_PERCENT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PricingError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn commission_table(&self) -> CommissionTable {
        CommissionTable {
            agency: self.commission.agency.or(AGENCY_DEFAULT_RATES),
            freelancer: self.commission.freelancer.or(FREELANCER_DEFAULT_RATES),
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        self.commission_table().validate()?;
        validate_non_empty_string("display.currency_symbol", &self.display.currency_symbol)
    }
}

impl PolicyProvider for PricingConfig {
    fn commission_policy(&self) -> CommissionPolicy {
        CommissionPolicy::new(self.commission_table(), self.policy.zero_overrides)
    }

    fn currency_symbol(&self) -> &str {
        &self.display.currency_symbol
    }
}

impl Validate for PricingConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
