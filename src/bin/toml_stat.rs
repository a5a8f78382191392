use clap::Parser;
use inspire_stat::core::series_batch::{plan_series, run_series};
use inspire_stat::utils::{
    logger::{self, LogFormat},
    validation::Validate,
};
use inspire_stat::TomlConfig;

#[derive(Parser)]
#[command(name = "toml-stat")]
#[command(about = "Run every yearly series listed in a TOML configuration")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "inspire-stat.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Only run the series with this term (exact match)
    #[arg(long)]
    only: Option<String>,

    /// Dry run - show what would be queried without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_logger(args.verbose, LogFormat::from_json_flag(args.log_json));

    tracing::info!("🚀 Starting TOML-based inspire-stat");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Some(term) = &args.only {
        config.series.retain(|series| &series.term == term);
        tracing::info!("🔧 Restricted to series {:?}", term);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    tracing::info!(
        "✅ Configuration loaded: {} series, output directory {}",
        config.series.len(),
        config.output.directory
    );

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no queries will be made");
        for plan in plan_series(&config)? {
            println!("Series:  {}", plan.header);
            println!("  years:   {}", plan.query.year_count());
            println!("  queries: {} ... {}", plan.first_call, plan.last_call);
            println!("  output:  {}", plan.output_path);
        }
        return Ok(());
    }

    match run_series(&config).await {
        Ok(outcomes) => {
            for outcome in outcomes {
                println!(
                    "✅ {} years, {} papers -> {}",
                    outcome.series.len(),
                    outcome.series.total(),
                    outcome.output_path
                );
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
