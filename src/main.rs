use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use fintrack::cli::{
    handle_currency_command, handle_export_command, handle_transaction_command,
    handle_view_command, ExportFormat, TransactionCommands, ViewCommands,
};
use fintrack::config::{Settings, TrackerPaths};
use fintrack::services::Ledger;
use fintrack::storage::FileStore;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Terminal personal finance tracker",
    long_about = "fintrack records your income and expenses from the command line \
                  and shows where the money goes: totals, spending by category \
                  and a month-by-month summary."
)]
struct Cli {
    /// Log level (error, warn, info, debug, trace). RUST_LOG takes precedence.
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    #[command(flatten)]
    View(ViewCommands),

    /// Show the active currency, or set it
    Currency {
        /// Currency code (USD, EUR, GBP, INR, JPY, CNY, AUD, CAD)
        code: Option<String>,
    },

    /// Export the transaction history to a file
    Export {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
    }
    debug!(base_dir = %paths.base_dir().display(), "paths resolved");

    let mut ledger = Ledger::load(FileStore::new(paths.data_dir()))?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&mut ledger, &settings, cmd)?;
        }
        Some(Commands::View(cmd)) => {
            handle_view_command(&ledger, &settings, cmd);
        }
        Some(Commands::Currency { code }) => {
            handle_currency_command(&mut ledger, code)?;
        }
        Some(Commands::Export { output, format }) => {
            handle_export_command(ledger.snapshot(), &output, format)?;
        }
        Some(Commands::Config) => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency:      {}", ledger.currency().badge());
            println!("  Date format:   {}", settings.date_format);
            println!("  Show icons:    {}", settings.show_icons);
            println!("  History limit: {}", settings.history_limit);
        }
        None => {
            println!("fintrack - Terminal personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack dashboard' to see your totals.");
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "{}={},{}={}",
            env!("CARGO_CRATE_NAME"),
            level,
            env!("CARGO_BIN_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
