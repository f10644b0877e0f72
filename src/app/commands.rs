use crate::config::cli::{BatchArgs, CliConfig, Command, QuoteArgs, ResolveArgs};
use crate::config::toml_config::PricingConfig;
use crate::core::batch::{quote_csv, BatchSummary};
use crate::core::commission::ZeroOverridePolicy;
use crate::core::engine::PricingEngine;
use crate::core::formatter::format_price_breakdown;
use crate::domain::model::QuoteRequest;
use crate::domain::ports::PolicyProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

/// 載入並驗證設定檔，建立定價引擎
pub fn build_engine(cli: &CliConfig) -> Result<PricingEngine> {
    let settings = PricingConfig::from_file_or_default(&cli.config)?;
    settings.validate()?;
    cli.validate()?;
    Ok(engine_for(&settings, &cli.command))
}

pub fn engine_for(settings: &dyn PolicyProvider, command: &Command) -> PricingEngine {
    let mut policy = settings.commission_policy();
    if command
        .commission_args()
        .is_some_and(|args| args.honor_zero_overrides)
    {
        policy.zero_overrides = ZeroOverridePolicy::Honor;
    }
    PricingEngine::new(policy).with_currency(settings.currency_symbol())
}

pub fn run_command<W: Write>(command: &Command, engine: &PricingEngine, out: &mut W) -> Result<()> {
    match command {
        Command::Quote(args) => run_quote(args, engine, out),
        Command::Resolve(args) => run_resolve(args, engine, out),
        Command::Batch(args) => run_batch(args, engine, out).map(|_| ()),
    }
}

fn run_quote<W: Write>(args: &QuoteArgs, engine: &PricingEngine, out: &mut W) -> Result<()> {
    let mut request = QuoteRequest {
        base_price: serde_json::Value::String(args.base_price.clone()),
        host_type: args.commission.host_type(),
        ..QuoteRequest::default()
    };
    request.overrides = args.commission.overrides();
    request.agency_defaults = args.commission.agency_defaults();

    let breakdown = engine.quote(&request);

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &breakdown)?;
        writeln!(out)?;
    } else {
        let currency = args.currency.as_deref().unwrap_or(engine.currency_symbol());
        writeln!(out, "{}", format_price_breakdown(Some(&breakdown), Some(currency)))?;
    }
    Ok(())
}

fn run_resolve<W: Write>(args: &ResolveArgs, engine: &PricingEngine, out: &mut W) -> Result<()> {
    let commission = &args.commission;
    let rates = engine.resolve(
        commission.host_type(),
        commission.overrides().as_ref(),
        commission.agency_defaults().as_ref(),
    );

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &rates)?;
        writeln!(out)?;
    } else {
        writeln!(out, "Host type: {}", commission.host_type())?;
        writeln!(out, "SAWA: {}%", rates.sawa_percent)?;
        writeln!(out, "Office: {}%", rates.office_percent)?;
    }
    Ok(())
}

fn run_batch<W: Write>(args: &BatchArgs, engine: &PricingEngine, out: &mut W) -> Result<BatchSummary> {
    tracing::info!("📁 Reading bookings from: {}", args.input.display());
    let input = BufReader::new(File::open(&args.input)?);

    match &args.output {
        Some(path) => {
            let summary = quote_csv(input, BufWriter::new(File::create(path)?), engine)?;
            tracing::info!("📁 Output saved to: {}", path.display());
            Ok(summary)
        }
        None => quote_csv(input, &mut *out, engine),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn run(args: &[&str]) -> String {
        let cli = CliConfig::try_parse_from(args).unwrap();
        let engine = engine_for(&PricingConfig::default(), &cli.command);
        let mut out = Vec::new();
        run_command(&cli.command, &engine, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_quote_text_output() {
        let output = run(&["sawa-pricing", "quote", "--base-price", "200"]);
        assert_eq!(
            output,
            "Host services: $200.00\nSAWA (35%): $70.00\nTotal: $270.00\n"
        );
    }

    #[test]
    fn test_quote_json_output() {
        let output = run(&[
            "sawa-pricing",
            "quote",
            "--base-price",
            "150",
            "--host-type",
            "agency",
            "--agency-sawa-default",
            "25",
            "--agency-office-default",
            "5",
            "--json",
        ]);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["sawaFee"], 37.5);
        assert_eq!(value["officeFee"], 7.5);
        assert_eq!(value["total"], 195.0);
    }

    #[test]
    fn test_honor_zero_overrides_flag() {
        let output = run(&[
            "sawa-pricing",
            "resolve",
            "--sawa-override",
            "0",
            "--honor-zero-overrides",
        ]);
        assert!(output.contains("SAWA: 0%"));

        let output = run(&["sawa-pricing", "resolve", "--sawa-override", "0"]);
        assert!(output.contains("SAWA: 35%"));
    }
}
