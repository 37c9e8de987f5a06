/// Property tests for cleaning, validation and feature extraction
use dnarisk::bio::{
    clean_sequence, extract_kmers, gc_content, nucleotide_frequency, statistics,
    validate_sequence, ErrorKind, SequenceValidator, ValidationError,
};
use proptest::prelude::*;
use proptest::sample::Index;
use std::collections::BTreeSet;

proptest! {
    #[test]
    fn clean_is_idempotent(raw in "[ACGTacgtn> \t\r\n]{0,200}") {
        let once = clean_sequence(&raw);
        prop_assert_eq!(clean_sequence(&once), once.clone());
    }

    #[test]
    fn clean_removes_whitespace_and_lowercase(raw in "[ACGTacgt \t\r\n]{0,200}") {
        let cleaned = clean_sequence(&raw);
        prop_assert!(!cleaned.chars().any(|c| c.is_whitespace() || c.is_lowercase()));
        let expected = raw.chars().filter(|c| !c.is_whitespace()).count();
        prop_assert_eq!(cleaned.len(), expected);
    }

    #[test]
    fn long_acgt_sequences_are_valid(seq in "[ACGT]{50,300}") {
        prop_assert!(validate_sequence(&seq).is_valid());
    }

    #[test]
    fn short_sequences_are_too_short(seq in "[ACGT]{1,49}") {
        let outcome = validate_sequence(&seq);
        prop_assert_eq!(outcome.error_message(), Some(
            "Sequence too short. Minimum length is 50 nucleotides".to_string()
        ));
    }

    #[test]
    fn invalid_characters_are_sorted_and_deduplicated(
        base in "[ACGT]{50,120}",
        inserts in prop::collection::vec(
            (any::<Index>(), "[BDEFHIJKLMNOPQRSUVWXYZ0-9]"),
            1..12,
        ),
    ) {
        let mut seq = base;
        let mut offending = BTreeSet::new();
        for (at, ch) in &inserts {
            let c = ch.chars().next().unwrap();
            offending.insert(c);
            let position = at.index(seq.len() + 1);
            seq.insert(position, c);
        }

        let expected = offending
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        prop_assert_eq!(
            validate_sequence(&seq).error_message(),
            Some(format!("Invalid nucleotides found: {}", expected))
        );
    }

    #[test]
    fn kmer_count_and_width(seq in "[ACGT]{0,120}", k in 1usize..10) {
        let kmers = extract_kmers(&seq, k);
        prop_assert_eq!(kmers.len(), (seq.len() + 1).saturating_sub(k));
        prop_assert!(kmers.iter().all(|kmer| kmer.len() == k));
        for (i, kmer) in kmers.iter().enumerate() {
            prop_assert_eq!(*kmer, &seq[i..i + k]);
        }
    }

    #[test]
    fn composition_is_bounded(seq in "[ACGT]{1,300}") {
        let gc = gc_content(&seq);
        prop_assert!((0.0..=100.0).contains(&gc));

        let freq = nucleotide_frequency(&seq);
        // Four values rounded to 2 decimals drift by at most 0.02 in total.
        prop_assert!((freq.total() - 100.0).abs() <= 0.0201);
        prop_assert_eq!(statistics(&seq).length, seq.len());
    }
}

#[test]
fn test_invalid_characters_are_listed_once_each() {
    let mut seq = "ACGT".repeat(15);
    seq.push_str("NXNX");
    let outcome = validate_sequence(&seq);
    assert_eq!(
        outcome.error_message().as_deref(),
        Some("Invalid nucleotides found: N, X")
    );
}

#[test]
fn test_empty_input_kind() {
    let err = SequenceValidator::default().accept("").unwrap_err();
    assert_eq!(err, ValidationError::Empty);
    assert_eq!(err.kind(), ErrorKind::EmptyInput);
    assert_eq!(err.to_string(), "Empty sequence provided");
}

#[test]
fn test_length_is_checked_before_alphabet() {
    let outcome = validate_sequence("ACGTNNNN");
    assert!(matches!(
        outcome.into_result(),
        Err(ValidationError::TooShort { length: 8, min_length: 50 })
    ));
}

#[test]
fn test_custom_minimum_length() {
    let validator = SequenceValidator::new(4);
    let sequence = validator.clean_and_accept(">sample\nacgt").unwrap();
    assert_eq!(sequence.as_str(), "ACGT");
}
