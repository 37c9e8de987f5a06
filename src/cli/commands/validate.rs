use super::SequenceInput;
use crate::bio::SequenceValidator;
use crate::cli::output::*;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::predictor::ValidationReport;
use crate::DnaRiskError;
use clap::Args;

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: SequenceInput,

    /// Minimum accepted length (overrides the configured value)
    #[arg(long, value_name = "N")]
    pub min_length: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn run(args: ValidateArgs, config: &Config) -> anyhow::Result<()> {
    let min_length = args
        .min_length
        .unwrap_or(config.validation.min_sequence_length);
    let validator = SequenceValidator::new(min_length);

    let candidate = args.input.read_candidate()?;
    tracing::debug!(
        "Validating {} characters from {}",
        candidate.chars().count(),
        args.input.describe()
    );

    let (report, rejection) = match validator.accept(&candidate) {
        Ok(sequence) => (ValidationReport::valid(sequence.statistics()), None),
        Err(err) => (ValidationReport::invalid(&err), Some(err)),
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            if let Some(stats) = &report.statistics {
                section_header("Sequence Validation");
                success("Sequence is valid");
                print_statistics(stats, true);
            }
        }
    }

    match rejection {
        Some(err) => Err(DnaRiskError::Validation(err).into()),
        None => Ok(()),
    }
}
