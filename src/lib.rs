pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::config::PricingConfig;
pub use crate::core::{
    calculator::{calculate_final_price, round2, BasePrice},
    commission::{resolve_commission, CommissionPolicy, CommissionTable, ZeroOverridePolicy},
    engine::PricingEngine,
    formatter::format_price_breakdown,
};
pub use domain::model::{
    AgencyDefaults, CommissionOverrides, CommissionRates, HostType, PriceBreakdown, QuoteRequest,
};
pub use utils::error::{PricingError, Result};
