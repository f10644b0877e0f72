//! CSV batch quoting: one price breakdown per booking row.

use crate::core::calculator::{round2, BasePrice};
use crate::core::engine::PricingEngine;
use crate::domain::model::{AgencyDefaults, CommissionOverrides, HostType, QuoteRequest};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchRow {
    #[serde(default)]
    pub base_price: Option<String>,
    #[serde(default)]
    pub host_type: Option<String>,
    #[serde(default)]
    pub sawa_override: Option<String>,
    #[serde(default)]
    pub office_override: Option<String>,
    #[serde(default)]
    pub agency_sawa_default: Option<String>,
    #[serde(default)]
    pub agency_office_default: Option<String>,
}

impl BatchRow {
    pub fn to_request(&self) -> QuoteRequest {
        let base = self
            .base_price
            .as_deref()
            .map(BasePrice::parse_lenient)
            .unwrap_or_default();

        let overrides = CommissionOverrides::new(
            parse_percent(&self.sawa_override),
            parse_percent(&self.office_override),
        );
        let defaults = AgencyDefaults::new(
            parse_percent(&self.agency_sawa_default),
            parse_percent(&self.agency_office_default),
        );

        let mut request = QuoteRequest::new(base.value(), HostType::from(self.host_type.as_deref()));
        if overrides != CommissionOverrides::default() {
            request = request.with_overrides(overrides);
        }
        if defaults != AgencyDefaults::default() {
            request = request.with_agency_defaults(defaults);
        }
        request
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchOutputRow {
    pub row: usize,
    pub host_type: HostType,
    pub base_price: f64,
    pub sawa_percent: f64,
    pub sawa_fee: f64,
    pub office_percent: f64,
    pub office_fee: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BatchSummary {
    pub rows: usize,
    pub grand_total: f64,
}

/// Prices every row of `input` and writes the breakdowns to `output`.
///
/// Unreadable numbers price as 0 / "not set"; only malformed CSV fails.
pub fn quote_csv<R: Read, W: Write>(
    input: R,
    output: W,
    engine: &PricingEngine,
) -> Result<BatchSummary> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);
    let mut writer = csv::Writer::from_writer(output);
    let mut summary = BatchSummary::default();

    for (index, row) in reader.deserialize::<BatchRow>().enumerate() {
        let row = row?;
        let request = row.to_request();
        let breakdown = engine.quote(&request);

        writer.serialize(BatchOutputRow {
            row: index + 1,
            host_type: request.host_type,
            base_price: breakdown.base_price,
            sawa_percent: breakdown.sawa_percent,
            sawa_fee: breakdown.sawa_fee,
            office_percent: breakdown.office_percent,
            office_fee: breakdown.office_fee,
            total: breakdown.total,
        })?;

        summary.rows += 1;
        summary.grand_total = round2(summary.grand_total + breakdown.total);
    }

    writer.flush()?;
    tracing::info!(
        "Quoted {} bookings, grand total {:.2}",
        summary.rows,
        summary.grand_total
    );
    Ok(summary)
}

fn parse_percent(raw: &Option<String>) -> Option<f64> {
    raw.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
