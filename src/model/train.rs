use crate::bio::kmer_string;
use crate::core::disease::Disease;
use crate::model::classifier::DEFAULT_TEMPERATURE;
use crate::model::{synthetic, CentroidClassifier, Classifier, KmerVectorizer, ModelBundle};
use crate::DnaRiskError;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct TrainingConfig {
    pub samples_per_class: usize,
    pub kmer_size: usize,
    pub max_features: usize,
    pub test_fraction: f64,
    pub temperature: f64,
    pub seed: u64,
    pub show_progress: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            samples_per_class: 300,
            kmer_size: 4,
            max_features: 1000,
            test_fraction: 0.2,
            temperature: DEFAULT_TEMPERATURE,
            seed: 42,
            show_progress: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassMetrics {
    pub label: String,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    pub bundle: ModelBundle,
    pub accuracy: f64,
    pub per_class: Vec<ClassMetrics>,
    pub train_size: usize,
    pub test_size: usize,
}

/// Shuffle each class independently and hold out `test_fraction` of it.
fn stratified_split(
    labels: &[Disease],
    test_fraction: f64,
    rng: &mut StdRng,
) -> (Vec<usize>, Vec<usize>) {
    let mut train = Vec::new();
    let mut test = Vec::new();

    for disease in Disease::ALL {
        let mut members: Vec<usize> = labels
            .iter()
            .enumerate()
            .filter(|(_, l)| **l == disease)
            .map(|(i, _)| i)
            .collect();
        members.shuffle(rng);

        let n_test = ((members.len() as f64) * test_fraction).round() as usize;
        let n_test = n_test.min(members.len().saturating_sub(1));
        test.extend_from_slice(&members[..n_test]);
        train.extend_from_slice(&members[n_test..]);
    }

    (train, test)
}

fn evaluate(truth: &[&str], predicted: &[&str], classes: &[String]) -> (f64, Vec<ClassMetrics>) {
    let correct = truth.iter().zip(predicted).filter(|(t, p)| t == p).count();
    let accuracy = if truth.is_empty() {
        0.0
    } else {
        correct as f64 / truth.len() as f64
    };

    let per_class = classes
        .iter()
        .map(|class| {
            let class = class.as_str();
            let tp = truth
                .iter()
                .zip(predicted)
                .filter(|(t, p)| **t == class && **p == class)
                .count();
            let predicted_pos = predicted.iter().filter(|p| **p == class).count();
            let support = truth.iter().filter(|t| **t == class).count();

            let precision = if predicted_pos == 0 { 0.0 } else { tp as f64 / predicted_pos as f64 };
            let recall = if support == 0 { 0.0 } else { tp as f64 / support as f64 };
            let f1 = if precision + recall == 0.0 {
                0.0
            } else {
                2.0 * precision * recall / (precision + recall)
            };

            ClassMetrics {
                label: class.to_string(),
                precision,
                recall,
                f1,
                support,
            }
        })
        .collect();

    (accuracy, per_class)
}

fn spinner(enabled: bool, message: &str) -> Option<ProgressBar> {
    if !enabled {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    Some(pb)
}

/// Generate synthetic data, fit the vectorizer and the centroid classifier,
/// and score the model on a stratified hold-out set.
pub fn train_model(config: &TrainingConfig) -> Result<TrainingOutcome, DnaRiskError> {
    if config.kmer_size == 0 {
        return Err(DnaRiskError::Config("kmer_size must be at least 1".to_string()));
    }
    if config.max_features == 0 {
        return Err(DnaRiskError::Config(
            "max_features must be at least 1".to_string(),
        ));
    }
    if !(0.0..1.0).contains(&config.test_fraction) {
        return Err(DnaRiskError::Config(
            "test_fraction must be in [0, 1)".to_string(),
        ));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);

    let pb = spinner(config.show_progress, "Generating synthetic training data...");
    let data = synthetic::generate_training_data(&mut rng, config.samples_per_class)?;
    tracing::info!(
        "Generated {} sequences across {} disease types",
        data.len(),
        Disease::ALL.len()
    );

    if let Some(pb) = &pb {
        pb.set_message("Converting sequences to k-mers...");
    }
    let documents: Vec<String> = data
        .par_iter()
        .map(|(seq, _)| kmer_string(seq, config.kmer_size))
        .collect();
    let labels: Vec<Disease> = data.iter().map(|(_, d)| *d).collect();

    let (train_idx, test_idx) = stratified_split(&labels, config.test_fraction, &mut rng);

    if let Some(pb) = &pb {
        pb.set_message("Vectorizing k-mers...");
    }
    let train_docs: Vec<&str> = train_idx.iter().map(|&i| documents[i].as_str()).collect();
    let mut vectorizer = KmerVectorizer::new(config.max_features);
    vectorizer.fit(&train_docs);

    let train_rows: Vec<Vec<f64>> = train_docs
        .par_iter()
        .map(|doc| vectorizer.transform(doc))
        .collect();
    let train_labels: Vec<String> = train_idx
        .iter()
        .map(|&i| labels[i].label().to_string())
        .collect();

    if let Some(pb) = &pb {
        pb.set_message("Fitting class profiles...");
    }
    let classifier = CentroidClassifier::fit(&train_rows, &train_labels, config.temperature)?;

    if let Some(pb) = &pb {
        pb.set_message("Evaluating model...");
    }
    let predicted: Vec<&str> = test_idx
        .par_iter()
        .map(|&i| {
            let row = vectorizer.transform(&documents[i]);
            classifier
                .predict(&row)
                .map(|(class, _)| classifier.classes()[class].as_str())
        })
        .collect::<Result<_, _>>()?;
    let truth: Vec<&str> = test_idx.iter().map(|&i| labels[i].label()).collect();
    let (accuracy, per_class) = evaluate(&truth, &predicted, classifier.classes());

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    tracing::info!("Model accuracy: {:.4}", accuracy);

    let mut bundle = ModelBundle::new(config.kmer_size, vectorizer, classifier);
    bundle.accuracy = Some(accuracy);

    Ok(TrainingOutcome {
        bundle,
        accuracy,
        per_class,
        train_size: train_idx.len(),
        test_size: test_idx.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> TrainingConfig {
        TrainingConfig {
            samples_per_class: 40,
            kmer_size: 1,
            max_features: 16,
            ..TrainingConfig::default()
        }
    }

    #[test]
    fn test_rejects_empty_vocabulary_cap() {
        let config = TrainingConfig {
            max_features: 0,
            ..small_config()
        };
        assert!(matches!(train_model(&config), Err(DnaRiskError::Config(_))));
    }

    #[test]
    fn test_stratified_split_sizes() {
        let labels: Vec<Disease> = Disease::ALL
            .iter()
            .flat_map(|d| std::iter::repeat(*d).take(10))
            .collect();
        let (train, test) = stratified_split(&labels, 0.2, &mut StdRng::seed_from_u64(3));
        assert_eq!(train.len(), 48);
        assert_eq!(test.len(), 12);
    }

    #[test]
    fn test_training_beats_chance_on_composition() {
        let outcome = train_model(&small_config()).unwrap();
        assert_eq!(outcome.bundle.classes().len(), 6);
        assert_eq!(outcome.per_class.len(), 6);
        assert_eq!(outcome.train_size + outcome.test_size, 240);
        assert!(outcome.accuracy > 0.3, "accuracy was {}", outcome.accuracy);
    }

    #[test]
    fn test_training_is_deterministic() {
        let a = train_model(&small_config()).unwrap();
        let b = train_model(&small_config()).unwrap();
        assert_eq!(a.accuracy, b.accuracy);
        assert_eq!(a.bundle.classifier, b.bundle.classifier);
    }

    #[test]
    fn test_evaluate_metrics() {
        let classes = vec!["x".to_string(), "y".to_string()];
        let (accuracy, metrics) = evaluate(&["x", "x", "y"], &["x", "y", "y"], &classes);
        assert!((accuracy - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(metrics[0].support, 2);
        assert_eq!(metrics[0].precision, 1.0);
        assert_eq!(metrics[1].recall, 1.0);
    }
}
