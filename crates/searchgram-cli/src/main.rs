use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use searchgram_core::config::Config;
use searchgram_core::error::SearchgramError;
use searchgram_core::loader::ReportLoader;
use searchgram_core::util::fingerprint;
use std::fs;
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Search query n-gram auditor for Google Ads search terms reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Search terms report exported from Google Ads (CSV)
    #[arg(global = true, short, long, default_value = "data/search_terms.csv")]
    input: String,

    /// JSON file with loader/report settings; explicit flags still win
    #[arg(global = true, long = "config")]
    config_file: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Account summary and the words burning budget without conversions
    Audit(cmd::audit::AuditArgs),
    /// Performance tables per n-gram length
    Explore(cmd::explore::ExploreArgs),
    /// Write the n-gram tables to disk
    Export(cmd::export::ExportArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    // --debug wins over RUST_LOG; otherwise RUST_LOG, falling back to info
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let (cli_config, sub_name) = match &cli.command {
        Commands::Audit(args) => (&args.config, "audit"),
        Commands::Explore(args) => (&args.config, "explore"),
        Commands::Export(args) => (&args.config, "export"),
    };

    let config = match &cli.config_file {
        Some(path) => {
            info!("⚙️  Loading settings from: {}", path);
            let mut file_config = Config::load_from_file(path).unwrap_or_else(|e| {
                error!("❌ Could not load settings '{}': {}", path, e);
                process::exit(1);
            });
            if let Some(sub_matches) = matches.subcommand_matches(sub_name) {
                file_config.merge_from_cli(cli_config, sub_matches);
            }
            file_config
        }
        None => cli_config.clone(),
    };

    let dataset = load_dataset(&cli.input, &config).unwrap_or_else(|e| {
        if e.is_unreadable() {
            error!("❌ Error reading file. Please make sure it's the standard Google Ads Search Terms CSV.");
        }
        error!("   {}", e);
        process::exit(1);
    });

    let result = match cli.command {
        Commands::Audit(args) => cmd::audit::run(&args, &config, &dataset),
        Commands::Explore(_) => cmd::explore::run(&config, &dataset),
        Commands::Export(args) => cmd::export::run(&args, &config, &dataset),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn load_dataset(path: &str, config: &Config) -> Result<cmd::Dataset, SearchgramError> {
    let loader = ReportLoader::from_config(&config.loader)?;

    info!("📂 Loading report: {}", path);
    let raw = fs::read(path)?;
    let records = loader.load_from_bytes(&raw)?;

    if records.is_empty() {
        return Err(SearchgramError::Validation(
            "report contains no search terms".to_string(),
        ));
    }

    Ok(cmd::Dataset {
        records,
        fingerprint: fingerprint(&raw),
    })
}
