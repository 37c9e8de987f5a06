//! Normalization and validation of raw DNA input.
//!
//! Validation never fails with an `Err` for malformed input; the outcome is
//! reported as data through [`ValidationOutcome`] so callers can surface the
//! reason to users directly.

use crate::bio::sequence::Sequence;
use std::collections::BTreeSet;
use thiserror::Error;

/// Minimum number of nucleotides a sequence needs to be classified.
pub const MIN_SEQUENCE_LENGTH: usize = 50;

/// The accepted DNA alphabet.
pub const VALID_NUCLEOTIDES: [char; 4] = ['A', 'T', 'C', 'G'];

/// Coarse category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyInput,
    InvalidComposition,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty sequence provided")]
    Empty,

    #[error("Sequence too short. Minimum length is {min_length} nucleotides")]
    TooShort { length: usize, min_length: usize },

    #[error("Invalid nucleotides found: {}", join_chars(.found))]
    InvalidNucleotides { found: Vec<char> },
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::Empty => ErrorKind::EmptyInput,
            ValidationError::TooShort { .. } | ValidationError::InvalidNucleotides { .. } => {
                ErrorKind::InvalidComposition
            }
        }
    }
}

fn join_chars(chars: &[char]) -> String {
    chars
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result of [`SequenceValidator::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(ValidationError),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// Human-readable reason, `None` when valid.
    pub fn error_message(&self) -> Option<String> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(err) => Some(err.to_string()),
        }
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        match self {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::Invalid(err) => Err(err),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceValidator {
    min_length: usize,
}

impl Default for SequenceValidator {
    fn default() -> Self {
        Self::new(MIN_SEQUENCE_LENGTH)
    }
}

impl SequenceValidator {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Strip whitespace, drop a leading FASTA header and uppercase.
    pub fn clean(&self, raw: &str) -> String {
        clean_sequence(raw)
    }

    pub fn validate(&self, candidate: &str) -> ValidationOutcome {
        match self.check(candidate) {
            Ok(_) => ValidationOutcome::Valid,
            Err(err) => ValidationOutcome::Invalid(err),
        }
    }

    /// Validate and hand back the normalized sequence.
    pub fn accept(&self, candidate: &str) -> Result<Sequence, ValidationError> {
        self.check(candidate).map(Sequence::from_validated)
    }

    /// `clean` followed by `accept`.
    pub fn clean_and_accept(&self, raw: &str) -> Result<Sequence, ValidationError> {
        self.accept(&self.clean(raw))
    }

    fn check(&self, candidate: &str) -> Result<String, ValidationError> {
        if candidate.is_empty() {
            return Err(ValidationError::Empty);
        }

        let normalized = candidate.trim().to_uppercase();

        let length = normalized.chars().count();
        if length < self.min_length {
            return Err(ValidationError::TooShort {
                length,
                min_length: self.min_length,
            });
        }

        let invalid: BTreeSet<char> = normalized
            .chars()
            .filter(|c| !VALID_NUCLEOTIDES.contains(c))
            .collect();
        if !invalid.is_empty() {
            return Err(ValidationError::InvalidNucleotides {
                found: invalid.into_iter().collect(),
            });
        }

        Ok(normalized)
    }
}

/// Normalize raw text into a sequence candidate. Never fails.
///
/// When the text opens with a FASTA header, the header line (and any header
/// or blank lines directly following it) is dropped before whitespace is
/// removed, so the result never starts with `>` and cleaning is idempotent.
pub fn clean_sequence(raw: &str) -> String {
    if raw.trim_start().starts_with('>') {
        raw.lines()
            .skip_while(|line| {
                let line = line.trim();
                line.is_empty() || line.starts_with('>')
            })
            .flat_map(str::chars)
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_uppercase)
            .collect()
    } else {
        raw.chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Validate with the default minimum length.
pub fn validate_sequence(candidate: &str) -> ValidationOutcome {
    SequenceValidator::default().validate(candidate)
}
