pub mod config;
pub mod history;
pub mod kmers;
pub mod predict;
pub mod stats;
pub mod train;
pub mod validate;

use crate::bio::fasta::read_input;
use crate::core::predictor::prepare_input;
use clap::Args;
use std::io::Read;
use std::path::PathBuf;

/// Where a command reads its sequence from. Plain text and FASTA are both
/// accepted; with neither flag the sequence is read from stdin.
#[derive(Args, Debug, Clone, Default)]
pub struct SequenceInput {
    /// Sequence text (plain or FASTA)
    #[arg(short, long, value_name = "SEQUENCE", conflicts_with = "input")]
    pub sequence: Option<String>,

    /// Sequence file (.fasta, .fa, .txt, optionally .gz compressed)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

impl SequenceInput {
    /// Raw text as given by the user.
    pub fn read_raw(&self) -> anyhow::Result<String> {
        if let Some(sequence) = &self.sequence {
            return Ok(sequence.trim().to_string());
        }
        if let Some(path) = &self.input {
            return Ok(read_input(path)?);
        }

        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        if buffer.trim().is_empty() {
            anyhow::bail!("No sequence provided. Use --sequence, --input or pipe one on stdin");
        }
        Ok(buffer)
    }

    /// Cleaned sequence candidate, headers removed.
    pub fn read_candidate(&self) -> anyhow::Result<String> {
        Ok(prepare_input(&self.read_raw()?))
    }

    pub fn describe(&self) -> String {
        match (&self.sequence, &self.input) {
            (Some(_), _) => "command line".to_string(),
            (None, Some(path)) => path.display().to_string(),
            (None, None) => "stdin".to_string(),
        }
    }
}
