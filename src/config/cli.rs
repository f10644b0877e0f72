use crate::config::toml_config::DEFAULT_CONFIG_FILE;
use crate::domain::model::{AgencyDefaults, CommissionOverrides, HostType};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "sawa-pricing")]
#[command(about = "Booking price and commission calculator for SAWA hosts")]
pub struct CliConfig {
    /// Path to the pricing TOML file (built-in defaults are used if it does not exist)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, global = true)]
    pub config: PathBuf,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Price a single booking
    Quote(QuoteArgs),
    /// Show which commission rates apply to a host
    Resolve(ResolveArgs),
    /// Price every row of a CSV file
    Batch(BatchArgs),
}

#[derive(Debug, Clone, Args)]
pub struct CommissionArgs {
    /// "agency" or "freelancer"; anything else prices as a freelancer
    #[arg(long, default_value = "freelancer")]
    pub host_type: String,

    #[arg(long, allow_hyphen_values = true)]
    pub sawa_override: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub office_override: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub agency_sawa_default: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub agency_office_default: Option<f64>,

    /// Apply override values of 0 instead of falling back to the defaults
    #[arg(long)]
    pub honor_zero_overrides: bool,
}

impl CommissionArgs {
    pub fn host_type(&self) -> HostType {
        HostType::parse_lenient(&self.host_type)
    }

    pub fn overrides(&self) -> Option<CommissionOverrides> {
        if self.sawa_override.is_none() && self.office_override.is_none() {
            return None;
        }
        Some(CommissionOverrides::new(
            self.sawa_override,
            self.office_override,
        ))
    }

    pub fn agency_defaults(&self) -> Option<AgencyDefaults> {
        if self.agency_sawa_default.is_none() && self.agency_office_default.is_none() {
            return None;
        }
        Some(AgencyDefaults::new(
            self.agency_sawa_default,
            self.agency_office_default,
        ))
    }
}

impl Validate for CommissionArgs {
    fn validate(&self) -> Result<()> {
        if let Some(overrides) = self.overrides() {
            overrides.validate()?;
        }
        if let Some(defaults) = self.agency_defaults() {
            defaults.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Args)]
pub struct QuoteArgs {
    /// Host-set price before commission; non-numeric input prices as 0
    #[arg(long, allow_hyphen_values = true)]
    pub base_price: String,

    #[command(flatten)]
    pub commission: CommissionArgs,

    /// Currency symbol for the text breakdown (defaults to the config value)
    #[arg(long)]
    pub currency: Option<String>,

    /// Print the breakdown as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub commission: CommissionArgs,

    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct BatchArgs {
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output CSV path; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Command {
    pub fn commission_args(&self) -> Option<&CommissionArgs> {
        match self {
            Command::Quote(args) => Some(&args.commission),
            Command::Resolve(args) => Some(&args.commission),
            Command::Batch(_) => None,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match self.command.commission_args() {
            Some(args) => args.validate(),
            None => Ok(()),
        }
    }
}
