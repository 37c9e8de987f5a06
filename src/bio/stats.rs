//! Composition statistics for a single DNA sequence.
//!
//! These functions assume the input has already been validated. Feeding them
//! text with characters outside A/T/C/G still terminates, but the frequencies
//! will no longer sum to 100.

use serde::{Deserialize, Serialize};

/// Round to two decimals on the exact binary value, ties to even, so a
/// percentage such as 3.125 becomes 3.12.
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        round2(count as f64 / total as f64 * 100.0)
    }
}

/// Per-nucleotide share of a sequence, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NucleotideFrequency {
    #[serde(rename = "A")]
    pub a: f64,
    #[serde(rename = "T")]
    pub t: f64,
    #[serde(rename = "C")]
    pub c: f64,
    #[serde(rename = "G")]
    pub g: f64,
}

impl NucleotideFrequency {
    pub fn get(&self, nucleotide: char) -> Option<f64> {
        match nucleotide {
            'A' => Some(self.a),
            'T' => Some(self.t),
            'C' => Some(self.c),
            'G' => Some(self.g),
            _ => None,
        }
    }

    /// Entries in A, T, C, G order.
    pub fn entries(&self) -> [(char, f64); 4] {
        [('A', self.a), ('T', self.t), ('C', self.c), ('G', self.g)]
    }

    pub fn total(&self) -> f64 {
        self.a + self.t + self.c + self.g
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceStatistics {
    pub length: usize,
    pub gc_content: f64,
    pub nucleotide_frequency: NucleotideFrequency,
}

#[derive(Default)]
struct Counts {
    a: usize,
    t: usize,
    c: usize,
    g: usize,
    total: usize,
}

fn count(seq: &str) -> Counts {
    let mut counts = Counts::default();
    for base in seq.chars() {
        match base {
            'A' => counts.a += 1,
            'T' => counts.t += 1,
            'C' => counts.c += 1,
            'G' => counts.g += 1,
            _ => {}
        }
        counts.total += 1;
    }
    counts
}

/// Percentage of G and C bases, rounded to two decimals. `0.0` when empty.
pub fn gc_content(seq: &str) -> f64 {
    let counts = count(seq);
    percentage(counts.g + counts.c, counts.total)
}

/// Share of each nucleotide, rounded to two decimals. All zeros when empty.
pub fn nucleotide_frequency(seq: &str) -> NucleotideFrequency {
    let counts = count(seq);
    NucleotideFrequency {
        a: percentage(counts.a, counts.total),
        t: percentage(counts.t, counts.total),
        c: percentage(counts.c, counts.total),
        g: percentage(counts.g, counts.total),
    }
}

pub fn statistics(seq: &str) -> SequenceStatistics {
    let counts = count(seq);
    SequenceStatistics {
        length: counts.total,
        gc_content: percentage(counts.g + counts.c, counts.total),
        nucleotide_frequency: NucleotideFrequency {
            a: percentage(counts.a, counts.total),
            t: percentage(counts.t, counts.total),
            c: percentage(counts.c, counts.total),
            g: percentage(counts.g, counts.total),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_gc_content_empty() {
        assert_eq!(gc_content(""), 0.0);
    }

    #[test]
    fn test_all_adenine() {
        let seq = "A".repeat(52);
        assert_eq!(gc_content(&seq), 0.0);
        assert_eq!(
            nucleotide_frequency(&seq),
            NucleotideFrequency {
                a: 100.0,
                t: 0.0,
                c: 0.0,
                g: 0.0
            }
        );
    }

    #[test]
    fn test_gc_content_rounding() {
        // 1 of 3 bases
        assert_eq!(gc_content("GAA"), 33.33);
        assert_eq!(gc_content("GCAT"), 50.0);
    }

    #[test]
    fn test_exact_ties_round_to_even() {
        let seq = format!("GG{}", "A".repeat(62));
        assert_eq!(gc_content(&seq), 3.12);
        assert_eq!(nucleotide_frequency(&seq).a, 96.88);
        assert_eq!(round2(0.625), 0.62);
        assert_eq!(round2(2.675), 2.67);
        assert_eq!(round2(1.005), 1.0);
    }

    #[test]
    fn test_statistics_composes_parts() {
        let seq = "ATCGATCGATCG";
        let stats = statistics(seq);
        assert_eq!(stats.length, 12);
        assert_eq!(stats.gc_content, gc_content(seq));
        assert_eq!(stats.nucleotide_frequency, nucleotide_frequency(seq));
    }

    #[test]
    fn test_frequency_serializes_with_base_keys() {
        let json = serde_json::to_string(&nucleotide_frequency("ACGT")).unwrap();
        assert_eq!(json, r#"{"A":25.0,"T":25.0,"C":25.0,"G":25.0}"#);
    }

    #[test]
    fn test_unvalidated_input_does_not_sum_to_100() {
        let freq = nucleotide_frequency("ACGN");
        assert_eq!(freq.total(), 75.0);
    }
}
