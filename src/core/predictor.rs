//! Prediction orchestration.
//!
//! The classifier and the history store are held in an explicit
//! [`PredictionContext`] built once by [`PredictionContext::initialize`].
//! A context whose model failed to load stays usable for validation and
//! answers predictions with [`DnaRiskError::ModelNotReady`].

use crate::bio::fasta::{looks_like_fasta, parse_fasta, FastaRecord};
use crate::bio::stats::round2;
use crate::bio::{clean_sequence, Sequence, SequenceStatistics, SequenceValidator, ValidationError};
use crate::core::config::{Config, RiskConfig};
use crate::core::risk::RiskLevel;
use crate::model::ModelBundle;
use crate::storage::PredictionHistory;
use crate::DnaRiskError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predicted_disease: String,
    /// Probability of the predicted class, in percent
    pub confidence: f64,
    pub risk_level: RiskLevel,
    /// Percent per class, most likely first
    pub disease_probabilities: IndexMap<String, f64>,
    pub statistics: SequenceStatistics,
}

/// Payload answering "is this input usable?".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<SequenceStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationReport {
    pub fn valid(statistics: SequenceStatistics) -> Self {
        Self {
            valid: true,
            statistics: Some(statistics),
            error: None,
        }
    }

    pub fn invalid(error: &ValidationError) -> Self {
        Self {
            valid: false,
            statistics: None,
            error: Some(error.to_string()),
        }
    }
}

/// Outcome for one record of a multi-record FASTA input. Exactly one of
/// `result` and `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordPrediction {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<PredictionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub enum ModelState {
    Ready(ModelBundle),
    NotReady { reason: String },
}

pub struct PredictionContext {
    validator: SequenceValidator,
    model: ModelState,
    history: Option<PredictionHistory>,
    risk: RiskConfig,
}

/// Turn raw user text or file content into a sequence candidate.
pub fn prepare_input(raw: &str) -> String {
    if looks_like_fasta(raw) {
        clean_sequence(&parse_fasta(raw))
    } else {
        clean_sequence(raw)
    }
}

impl PredictionContext {
    pub fn new(validator: SequenceValidator, model: ModelState, risk: RiskConfig) -> Self {
        Self {
            validator,
            model,
            history: None,
            risk,
        }
    }

    pub fn with_history(mut self, history: PredictionHistory) -> Self {
        self.history = Some(history);
        self
    }

    /// Load the model named by `config` without a history store.
    ///
    /// A missing or unreadable model is not fatal: the context is left
    /// `NotReady` and still validates input.
    pub fn load(config: &Config) -> Self {
        let validator = SequenceValidator::new(config.validation.min_sequence_length);

        let model = match ModelBundle::load(&config.model.model_path) {
            Ok(bundle) => ModelState::Ready(bundle),
            Err(e) => {
                tracing::warn!(
                    "Model unavailable at {}: {}",
                    config.model.model_path.display(),
                    e
                );
                ModelState::NotReady {
                    reason: e.to_string(),
                }
            }
        };

        Self::new(validator, model, config.risk.clone())
    }

    /// [`Self::load`] plus the history store named by `config`. A store that
    /// cannot be opened disables history.
    pub fn initialize(config: &Config) -> Self {
        let mut context = Self::load(config);
        match PredictionHistory::open(&config.storage.database_path) {
            Ok(history) => context.history = Some(history),
            Err(e) => tracing::warn!(
                "Prediction history disabled ({}): {}",
                config.storage.database_path.display(),
                e
            ),
        }
        context
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.model, ModelState::Ready(_))
    }

    pub fn not_ready_reason(&self) -> Option<&str> {
        match &self.model {
            ModelState::Ready(_) => None,
            ModelState::NotReady { reason } => Some(reason),
        }
    }

    pub fn validator(&self) -> &SequenceValidator {
        &self.validator
    }

    pub fn history(&self) -> Option<&PredictionHistory> {
        self.history.as_ref()
    }

    pub fn validate_input(&self, raw: &str) -> ValidationReport {
        match self.validator.clean_and_accept(raw) {
            Ok(sequence) => ValidationReport::valid(sequence.statistics()),
            Err(err) => ValidationReport::invalid(&err),
        }
    }

    /// Validate raw input and classify it.
    pub fn predict_raw(&self, raw: &str) -> Result<(Sequence, PredictionResult), DnaRiskError> {
        let sequence = self.validator.accept(&prepare_input(raw))?;
        let result = self.predict(&sequence)?;
        Ok((sequence, result))
    }

    /// Classify each record on its own. A record that fails validation is
    /// reported in place; only model errors abort the batch.
    pub fn predict_records(
        &self,
        records: &[FastaRecord],
    ) -> Result<Vec<RecordPrediction>, DnaRiskError> {
        if !self.is_ready() {
            return Err(DnaRiskError::ModelNotReady);
        }

        records
            .iter()
            .map(|record| match self.validator.accept(&record.sequence) {
                Ok(sequence) => Ok(RecordPrediction {
                    id: record.id.clone(),
                    result: Some(self.predict(&sequence)?),
                    error: None,
                }),
                Err(err) => {
                    tracing::debug!("Skipping record {}: {}", record.id, err);
                    Ok(RecordPrediction {
                        id: record.id.clone(),
                        result: None,
                        error: Some(err.to_string()),
                    })
                }
            })
            .collect()
    }

    pub fn predict(&self, sequence: &Sequence) -> Result<PredictionResult, DnaRiskError> {
        let bundle = match &self.model {
            ModelState::Ready(bundle) => bundle,
            ModelState::NotReady { .. } => return Err(DnaRiskError::ModelNotReady),
        };

        let probabilities = bundle.predict_proba(sequence.as_str())?;
        let mut ranked: Vec<(&String, f64)> = bundle.classes().iter().zip(probabilities).collect();
        // Stable sort keeps class order among ties.
        ranked.sort_by(|(_, a), (_, b)| b.total_cmp(a));

        let (predicted, confidence) = ranked
            .first()
            .map(|(label, p)| ((*label).clone(), *p))
            .ok_or_else(|| DnaRiskError::Model("model has no classes".to_string()))?;

        let result = PredictionResult {
            predicted_disease: predicted,
            confidence: round2(confidence * 100.0),
            risk_level: RiskLevel::from_confidence_with(confidence, &self.risk),
            disease_probabilities: ranked
                .into_iter()
                .map(|(label, p)| (label.clone(), round2(p * 100.0)))
                .collect(),
            statistics: sequence.statistics(),
        };

        tracing::info!(
            "Predicted {} ({:.2}%, {} risk) for {} bp",
            result.predicted_disease,
            result.confidence,
            result.risk_level,
            result.statistics.length
        );

        if let Some(history) = &self.history {
            if let Err(e) = history.save(&result) {
                tracing::warn!("Error saving prediction: {}", e);
            }
        }

        Ok(result)
    }
}
