use clap::Parser;
use colored::*;
use dnarisk::cli::{commands, Cli, Commands};
use dnarisk::core::config::resolve_config;
use dnarisk::DnaRiskError;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // DNARISK_LOG wins over the -v flags
    let log_level = std::env::var("DNARISK_LOG").unwrap_or_else(|_| {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
        .to_string()
    });

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&log_level))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        let exit_code = match e.downcast_ref::<DnaRiskError>() {
            Some(DnaRiskError::Config(_)) => 2,
            Some(DnaRiskError::Io(_)) => 3,
            Some(DnaRiskError::Parse(_)) | Some(DnaRiskError::Validation(_)) => 4,
            Some(DnaRiskError::Database(_)) => 5,
            Some(DnaRiskError::Model(_)) | Some(DnaRiskError::ModelNotReady) => 6,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let explicit = cli.config.as_deref();
    let load = || resolve_config(explicit);

    match cli.command {
        Commands::Validate(args) => commands::validate::run(args, &load()?),
        Commands::Stats(args) => commands::stats::run(args, &load()?),
        Commands::Kmers(args) => commands::kmers::run(args, &load()?),
        Commands::Predict(args) => commands::predict::run(args, &load()?),
        Commands::History(args) => commands::history::run(args, &load()?),
        Commands::Train(args) => commands::train::run(args, &load()?),
        Commands::Config(args) => commands::config::run(args, explicit),
    }
}
