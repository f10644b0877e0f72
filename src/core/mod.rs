pub mod batch;
pub mod calculator;
pub mod commission;
pub mod engine;
pub mod formatter;

pub use crate::domain::model::{
    AgencyDefaults, CommissionOverrides, CommissionRates, HostType, PriceBreakdown, QuoteRequest,
};
pub use crate::domain::ports::PolicyProvider;
