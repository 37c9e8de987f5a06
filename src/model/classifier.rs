use crate::DnaRiskError;
use serde::{Deserialize, Serialize};

/// A probabilistic classifier over dense feature rows.
pub trait Classifier {
    /// Class labels, in the column order of [`Classifier::predict_proba`].
    fn classes(&self) -> &[String];

    fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>, DnaRiskError>;

    /// Index and probability of the most likely class.
    fn predict(&self, features: &[f64]) -> Result<(usize, f64), DnaRiskError> {
        let probabilities = self.predict_proba(features)?;
        probabilities
            .iter()
            .copied()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, p)| match best {
                Some((_, bp)) if bp >= p => best,
                _ => Some((i, p)),
            })
            .ok_or_else(|| DnaRiskError::Model("classifier has no classes".to_string()))
    }
}

/// Nearest-centroid classifier on L1-normalized k-mer profiles.
///
/// Each class is summarized by the mean of its normalized training rows.
/// Probabilities are a softmax over negative L1 distances to each centroid,
/// divided by `temperature`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CentroidClassifier {
    classes: Vec<String>,
    centroids: Vec<Vec<f64>>,
    temperature: f64,
}

pub const DEFAULT_TEMPERATURE: f64 = 0.02;

fn normalize(row: &[f64]) -> Vec<f64> {
    let total: f64 = row.iter().sum();
    if total > 0.0 {
        row.iter().map(|v| v / total).collect()
    } else {
        row.to_vec()
    }
}

fn l1_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}

impl CentroidClassifier {
    /// Fit one centroid per distinct label. Classes are sorted by label.
    pub fn fit(rows: &[Vec<f64>], labels: &[String], temperature: f64) -> Result<Self, DnaRiskError> {
        if rows.len() != labels.len() {
            return Err(DnaRiskError::Model(format!(
                "{} feature rows but {} labels",
                rows.len(),
                labels.len()
            )));
        }
        if rows.is_empty() {
            return Err(DnaRiskError::Model("no training rows".to_string()));
        }
        if temperature <= 0.0 {
            return Err(DnaRiskError::Model("temperature must be positive".to_string()));
        }

        let width = rows[0].len();
        if rows.iter().any(|r| r.len() != width) {
            return Err(DnaRiskError::Model("feature rows differ in width".to_string()));
        }

        let mut classes: Vec<String> = labels.to_vec();
        classes.sort();
        classes.dedup();

        let mut sums = vec![vec![0.0; width]; classes.len()];
        let mut counts = vec![0usize; classes.len()];
        for (row, label) in rows.iter().zip(labels) {
            // Labels came from `classes`, so the search always succeeds.
            let class = classes.binary_search(label).unwrap_or_default();
            for (acc, v) in sums[class].iter_mut().zip(normalize(row)) {
                *acc += v;
            }
            counts[class] += 1;
        }

        let centroids = sums
            .into_iter()
            .zip(counts)
            .map(|(sum, n)| sum.into_iter().map(|v| v / n as f64).collect())
            .collect();

        Ok(Self {
            classes,
            centroids,
            temperature,
        })
    }

    pub fn num_features(&self) -> usize {
        self.centroids.first().map_or(0, Vec::len)
    }
}

impl Classifier for CentroidClassifier {
    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>, DnaRiskError> {
        if features.len() != self.num_features() {
            return Err(DnaRiskError::Model(format!(
                "expected {} features, got {}",
                self.num_features(),
                features.len()
            )));
        }

        let profile = normalize(features);
        let scores: Vec<f64> = self
            .centroids
            .iter()
            .map(|c| -l1_distance(&profile, c) / self.temperature)
            .collect();

        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exp: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
        let total: f64 = exp.iter().sum();
        Ok(exp.into_iter().map(|e| e / total).collect())
    }
}
