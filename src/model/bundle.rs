use crate::bio::kmer_string;
use crate::model::{CentroidClassifier, Classifier, KmerVectorizer};
use crate::DnaRiskError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Everything needed to classify a sequence, persisted as one JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelBundle {
    pub kmer_size: usize,
    pub vectorizer: KmerVectorizer,
    pub classifier: CentroidClassifier,
    pub trained_at: DateTime<Utc>,
    /// Held-out accuracy measured at training time
    pub accuracy: Option<f64>,
}

impl ModelBundle {
    pub fn new(kmer_size: usize, vectorizer: KmerVectorizer, classifier: CentroidClassifier) -> Self {
        Self {
            kmer_size,
            vectorizer,
            classifier,
            trained_at: Utc::now(),
            accuracy: None,
        }
    }

    /// Class probabilities for an already validated sequence, in
    /// `classes()` order.
    pub fn predict_proba(&self, sequence: &str) -> Result<Vec<f64>, DnaRiskError> {
        let tokens = kmer_string(sequence, self.kmer_size);
        let features = self.vectorizer.transform(&tokens);
        self.classifier.predict_proba(&features)
    }

    pub fn classes(&self) -> &[String] {
        self.classifier.classes()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DnaRiskError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let bundle: ModelBundle = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            DnaRiskError::Model(format!("Failed to read model {}: {}", path.display(), e))
        })?;

        if !bundle.vectorizer.is_fitted() {
            return Err(DnaRiskError::Model(format!(
                "Model {} has an empty vocabulary",
                path.display()
            )));
        }
        if bundle.vectorizer.num_features() != bundle.classifier.num_features() {
            return Err(DnaRiskError::Model(format!(
                "Model {} is inconsistent: vectorizer has {} features, classifier expects {}",
                path.display(),
                bundle.vectorizer.num_features(),
                bundle.classifier.num_features()
            )));
        }

        tracing::info!(
            "Loaded model from {} ({} classes, k={})",
            path.display(),
            bundle.classes().len(),
            bundle.kmer_size
        );
        Ok(bundle)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), DnaRiskError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;
        tracing::info!("Model saved to {}", path.display());
        Ok(())
    }
}
