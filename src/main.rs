use clap::Parser;
use inspire_stat::core::series_batch::{plan_series, run_series};
use inspire_stat::utils::{
    logger::{self, LogFormat},
    validation::Validate,
};
use inspire_stat::CliConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_logger(config.verbose, LogFormat::from_json_flag(config.log_json));

    tracing::info!("Starting inspire-stat");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no queries will be made");
        for plan in plan_series(&config)? {
            println!("Series:  {}", plan.header);
            println!("Queries: {} ... {}", plan.first_call, plan.last_call);
            println!("Output:  {}", plan.output_path);
        }
        return Ok(());
    }

    match run_series(&config).await {
        Ok(outcomes) => {
            for outcome in outcomes {
                println!("✅ {} years written", outcome.series.len());
                println!("📁 Output saved to: {}", outcome.output_path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
