use crate::bio::{kmer, stats};
use serde::Serialize;
use std::fmt;

/// A validated DNA sequence: uppercase, drawn from A/T/C/G only and at least
/// as long as the validator that produced it requires.
///
/// Only [`SequenceValidator`](crate::bio::SequenceValidator) constructs one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Sequence {
    residues: String,
}

impl Sequence {
    pub(crate) fn from_validated(residues: String) -> Self {
        Self { residues }
    }

    pub fn as_str(&self) -> &str {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn kmers(&self, k: usize) -> Vec<&str> {
        kmer::extract_kmers(&self.residues, k)
    }

    pub fn kmer_string(&self, k: usize) -> String {
        kmer::kmer_string(&self.residues, k)
    }

    pub fn statistics(&self) -> stats::SequenceStatistics {
        stats::statistics(&self.residues)
    }

    /// First `max` bases, with `...` appended when truncated.
    pub fn preview(&self, max: usize) -> String {
        if self.residues.len() > max {
            format!("{}...", &self.residues[..max])
        } else {
            self.residues.clone()
        }
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.residues
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.residues)
    }
}
