use super::SequenceInput;
use crate::bio::SequenceValidator;
use crate::cli::output::*;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::DnaRiskError;
use clap::Args;

#[derive(Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub input: SequenceInput,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn run(args: StatsArgs, config: &Config) -> anyhow::Result<()> {
    let validator = SequenceValidator::new(config.validation.min_sequence_length);
    let sequence = validator
        .accept(&args.input.read_candidate()?)
        .map_err(DnaRiskError::from)?;
    let stats = sequence.statistics();

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        OutputFormat::Text => {
            section_header("Sequence Statistics");
            tree_item(false, "Source", Some(&args.input.describe()));
            tree_item(false, "Preview", Some(&sequence.preview(50)));
            print_statistics(&stats, true);
        }
    }

    Ok(())
}
