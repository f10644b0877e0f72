use clap::Parser;
use sawa_pricing::app::commands::{build_engine, run_command};
use sawa_pricing::utils::logger;
use sawa_pricing::CliConfig;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(logger::LogFormat::from_flag(config.json_logs), config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    let engine = match build_engine(&config) {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run_command(&config.command, &engine, &mut out) {
        tracing::error!(
            "❌ Pricing failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}
