pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "dnarisk",
    version,
    about = "DNA sequence validation, k-mer features and disease-risk screening",
    long_about = "dnarisk validates DNA sequences, computes composition statistics and k-mer \
                  features, and classifies sequences into one of six disease-risk categories \
                  with a locally trained model. Predictions are for educational and research \
                  purposes only."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to $DNARISK_HOME/config.toml when present)
    #[arg(short, long, value_name = "FILE", global = true, env = "DNARISK_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether a sequence is usable for prediction
    Validate(commands::validate::ValidateArgs),

    /// Show composition statistics for a sequence
    Stats(commands::stats::StatsArgs),

    /// Print the k-mer tokenization of a sequence
    Kmers(commands::kmers::KmersArgs),

    /// Classify a sequence into a disease-risk category
    Predict(commands::predict::PredictArgs),

    /// Show recent predictions
    History(commands::history::HistoryArgs),

    /// Train a model on synthetic sequences
    Train(commands::train::TrainArgs),

    /// Manage the configuration file
    Config(commands::config::ConfigArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
