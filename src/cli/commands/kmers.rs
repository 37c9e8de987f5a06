use super::SequenceInput;
use crate::bio::SequenceValidator;
use crate::cli::output::*;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::DnaRiskError;
use clap::Args;
use indexmap::IndexMap;
use serde_json::json;

#[derive(Args)]
pub struct KmersArgs {
    #[command(flatten)]
    pub input: SequenceInput,

    /// K-mer length (defaults to the configured feature size)
    #[arg(short = 'k', long = "kmer-size", value_name = "K")]
    pub kmer_size: Option<usize>,

    /// Print a count per distinct k-mer instead of the token string
    #[arg(long)]
    pub counts: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn run(args: KmersArgs, config: &Config) -> anyhow::Result<()> {
    let k = args.kmer_size.unwrap_or(config.features.kmer_size);
    let validator = SequenceValidator::new(config.validation.min_sequence_length);
    let sequence = validator
        .accept(&args.input.read_candidate()?)
        .map_err(DnaRiskError::from)?;
    let kmers = sequence.kmers(k);

    if args.counts {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for kmer in &kmers {
            *counts.entry(*kmer).or_insert(0) += 1;
        }
        counts.sort_by(|ka, a, kb, b| b.cmp(a).then_with(|| ka.cmp(kb)));

        match args.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&counts)?),
            OutputFormat::Text => {
                section_header(&format!("{}-mer Counts", k));
                info(&format!(
                    "{} k-mers, {} distinct",
                    format_number(kmers.len()),
                    format_number(counts.len())
                ));
                let mut table = create_standard_table();
                table.set_header(vec![header_cell("K-mer"), header_cell("Count")]);
                for (kmer, count) in &counts {
                    table.add_row(vec![kmer.to_string(), format_number(*count)]);
                }
                println!("{}", table);
            }
        }
        return Ok(());
    }

    match args.format {
        OutputFormat::Json => {
            let payload = json!({ "k": k, "count": kmers.len(), "kmers": kmers });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Text => println!("{}", kmers.join(" ")),
    }

    Ok(())
}
