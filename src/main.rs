use std::fs::File;
use std::path::PathBuf;

use bankease::LogLevel;
use bankease::core::config::{self, CliOverrides};
use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};

#[derive(Parser)]
#[command(name = "bankease", about = "Mobile banking prototype in the terminal")]
struct Args {
    /// Config file to use instead of ~/.bankease/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log verbosity
    #[arg(short, long, value_enum)]
    log_level: Option<LogLevel>,

    /// Account holder shown on the settings and status screens
    #[arg(long)]
    holder_name: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config is read before the logger exists, so a parse failure goes to
    // stderr as well as the log once it is up.
    let (file_config, load_error) = match config::load_config(args.config.as_deref()) {
        Ok(c) => (c, None),
        Err(e) => {
            eprintln!("bankease: {e}; using defaults");
            (config::BankEaseConfig::default(), Some(e))
        }
    };
    let cli = CliOverrides {
        log_level: args.log_level,
        holder_name: args.holder_name,
    };
    let resolved = config::resolve(&file_config, &cli);

    // Initialize file logger; the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level.filter(), log_config, log_file);
    }

    if let Some(e) = load_error {
        log::warn!("Falling back to default config: {}", e);
    }
    log::info!(
        "BankEase starting up (log level: {}, holder: {})",
        resolved.log_level,
        resolved.holder_name
    );

    bankease::tui::run(resolved)
}
