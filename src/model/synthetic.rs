//! Synthetic training sequences with per-category composition biases.

use crate::core::disease::Disease;
use crate::DnaRiskError;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

const BASES: [char; 4] = ['A', 'T', 'C', 'G'];

/// Sequence lengths are drawn uniformly from this range.
pub const LENGTH_RANGE: std::ops::Range<usize> = 150..500;

pub fn generate_sequence<R: Rng + ?Sized>(
    rng: &mut R,
    disease: Disease,
    length: usize,
) -> Result<String, DnaRiskError> {
    let weights = WeightedIndex::new(disease.composition_bias())
        .map_err(|e| DnaRiskError::Model(format!("invalid composition bias: {}", e)))?;
    Ok((0..length).map(|_| BASES[weights.sample(rng)]).collect())
}

/// `samples_per_class` sequences for every category, grouped by category.
pub fn generate_training_data<R: Rng + ?Sized>(
    rng: &mut R,
    samples_per_class: usize,
) -> Result<Vec<(String, Disease)>, DnaRiskError> {
    let mut data = Vec::with_capacity(samples_per_class * Disease::ALL.len());
    for disease in Disease::ALL {
        for _ in 0..samples_per_class {
            let length = rng.gen_range(LENGTH_RANGE);
            data.push((generate_sequence(rng, disease, length)?, disease));
        }
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bio::{validate_sequence, nucleotide_frequency};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_sequences_are_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        let data = generate_training_data(&mut rng, 3).unwrap();
        assert_eq!(data.len(), 18);
        for (seq, _) in &data {
            assert!(LENGTH_RANGE.contains(&seq.len()));
            assert!(validate_sequence(seq).is_valid());
        }
    }

    #[test]
    fn test_bias_shows_in_composition() {
        let mut rng = StdRng::seed_from_u64(11);
        let seq = generate_sequence(&mut rng, Disease::CancerRisk, 20_000).unwrap();
        let freq = nucleotide_frequency(&seq);
        assert!((freq.c - 35.0).abs() < 2.0, "C frequency was {}", freq.c);
    }

    #[test]
    fn test_same_seed_same_data() {
        let a = generate_training_data(&mut StdRng::seed_from_u64(1), 2).unwrap();
        let b = generate_training_data(&mut StdRng::seed_from_u64(1), 2).unwrap();
        assert_eq!(a, b);
    }
}
