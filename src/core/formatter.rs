use crate::core::calculator::round2;
use crate::domain::model::PriceBreakdown;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Renders a breakdown as display lines joined by `\n`.
///
/// The office line only appears when the office percentage is positive.
/// A missing breakdown renders as an empty string.
pub fn format_price_breakdown(
    breakdown: Option<&PriceBreakdown>,
    currency_symbol: Option<&str>,
) -> String {
    let Some(b) = breakdown else {
        return String::new();
    };
    let currency = currency_symbol.unwrap_or(DEFAULT_CURRENCY_SYMBOL);

    let mut lines = vec![
        format!("Host services: {}{}", currency, money(b.base_price)),
        format!(
            "SAWA ({}%): {}{}",
            percent(b.sawa_percent),
            currency,
            money(b.sawa_fee)
        ),
    ];
    if b.has_office_line() {
        lines.push(format!(
            "Office ({}%): {}{}",
            percent(b.office_percent),
            currency,
            money(b.office_fee)
        ));
    }
    lines.push(format!("Total: {}{}", currency, money(b.total)));

    lines.join("\n")
}

fn money(amount: f64) -> String {
    // Cents are rounded half away from zero before display.
    format!("{:.2}", round2(amount))
}

// 35.0 -> "35", 12.5 -> "12.5"
fn percent(value: f64) -> String {
    format!("{}", value + 0.0)
}
