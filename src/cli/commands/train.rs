use crate::cli::output::*;
use crate::core::config::Config;
use crate::model::classifier::DEFAULT_TEMPERATURE;
use crate::model::{train_model, TrainingConfig, TrainingOutcome};
use clap::Args;
use comfy_table::Cell;
use std::path::PathBuf;

#[derive(Args)]
pub struct TrainArgs {
    /// Synthetic sequences generated per disease type
    #[arg(long, default_value = "300", value_name = "N")]
    pub samples_per_class: usize,

    /// K-mer length (defaults to the configured feature size)
    #[arg(short = 'k', long, value_name = "K")]
    pub kmer_size: Option<usize>,

    /// Vocabulary cap (defaults to the configured value)
    #[arg(long, value_name = "N")]
    pub max_features: Option<usize>,

    /// Fraction of each class held out for evaluation
    #[arg(long, default_value = "0.2")]
    pub test_fraction: f64,

    /// Softmax temperature of the classifier
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
    pub temperature: f64,

    /// Random seed for data generation and the split
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Where to write the model bundle (defaults to the configured path)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Hide the progress spinner
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run(args: TrainArgs, config: &Config) -> anyhow::Result<()> {
    let training = TrainingConfig {
        samples_per_class: args.samples_per_class,
        kmer_size: args.kmer_size.unwrap_or(config.features.kmer_size),
        max_features: args.max_features.unwrap_or(config.features.max_features),
        test_fraction: args.test_fraction,
        temperature: args.temperature,
        seed: args.seed,
        show_progress: !args.quiet,
    };
    let output = args
        .output
        .unwrap_or_else(|| config.model.model_path.clone());

    if !args.quiet {
        section_header("Training Disease Risk Model");
        tree_item(false, "Samples per class", Some(&format_number(training.samples_per_class)));
        tree_item(false, "K-mer size", Some(&training.kmer_size.to_string()));
        tree_item(true, "Max features", Some(&format_number(training.max_features)));
    }

    let outcome = train_model(&training)?;
    outcome.bundle.save(&output)?;

    if !args.quiet {
        print_outcome(&outcome);
    }
    success(&format!("Model saved to {}", output.display()));

    Ok(())
}

fn print_outcome(outcome: &TrainingOutcome) {
    subsection_header("Evaluation");
    tree_item(false, "Training sequences", Some(&format_number(outcome.train_size)));
    tree_item(false, "Test sequences", Some(&format_number(outcome.test_size)));
    tree_item(
        false,
        "Vocabulary",
        Some(&format_number(outcome.bundle.vectorizer.num_features())),
    );
    tree_item(true, "Accuracy", Some(&format!("{:.4}", outcome.accuracy)));

    let mut table = create_standard_table();
    table.set_header(vec![
        header_cell("Disease"),
        header_cell("Precision"),
        header_cell("Recall"),
        header_cell("F1"),
        header_cell("Support"),
    ]);
    for metrics in &outcome.per_class {
        table.add_row(vec![
            Cell::new(&metrics.label),
            Cell::new(format!("{:.2}", metrics.precision)),
            Cell::new(format!("{:.2}", metrics.recall)),
            Cell::new(format!("{:.2}", metrics.f1)),
            Cell::new(metrics.support),
        ]);
    }
    println!("{}", table);
}
