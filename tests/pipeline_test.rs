/// End-to-end flow: train, persist, reload, predict, record, report
mod common;

use chrono::Local;
use dnarisk::core::config::Config;
use dnarisk::core::disease::Disease;
use dnarisk::core::predictor::PredictionContext;
use dnarisk::model::synthetic::generate_sequence;
use dnarisk::model::{train_model, ModelBundle, TrainingConfig};
use dnarisk::report::{Format, ReportGenerator};
use dnarisk::DnaRiskError;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn test_config(env: &common::TestEnvironment) -> Config {
    let mut config = Config::default();
    config.model.model_path = env.path("models/model.json");
    config.storage.database_path = env.path("data/predictions.db");
    config
}

fn quick_training() -> TrainingConfig {
    TrainingConfig {
        samples_per_class: 30,
        kmer_size: 1,
        max_features: 16,
        seed: 3,
        ..TrainingConfig::default()
    }
}

#[test]
fn test_train_save_reload_predict() {
    let env = common::TestEnvironment::new();
    let config = test_config(&env);

    let outcome = train_model(&quick_training()).unwrap();
    assert_eq!(outcome.per_class.len(), Disease::ALL.len());
    outcome.bundle.save(&config.model.model_path).unwrap();

    let reloaded = ModelBundle::load(&config.model.model_path).unwrap();
    assert_eq!(reloaded.classes(), outcome.bundle.classes());
    assert_eq!(reloaded.kmer_size, 1);

    let context = PredictionContext::initialize(&config);
    assert!(context.is_ready());

    let mut rng = StdRng::seed_from_u64(99);
    let raw = generate_sequence(&mut rng, Disease::CancerRisk, 400).unwrap();
    let (sequence, result) = context.predict_raw(&raw.to_lowercase()).unwrap();

    assert_eq!(sequence.as_str(), raw);
    assert_eq!(result.disease_probabilities.len(), Disease::ALL.len());
    assert_eq!(
        result.disease_probabilities.get_index(0).map(|(k, _)| k.as_str()),
        Some(result.predicted_disease.as_str())
    );
    let values: Vec<f64> = result.disease_probabilities.values().copied().collect();
    assert!(values.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(values[0], result.confidence);
    assert_eq!(result.statistics.length, 400);

    let history = context.history().unwrap();
    assert_eq!(history.count().unwrap(), 1);
    let entry = &history.recent(10).unwrap()[0];
    assert_eq!(entry.predicted_disease, result.predicted_disease);
    assert_eq!(entry.sequence_length, 400);
    assert_eq!(entry.risk_level, result.risk_level.as_str());

    let report = ReportGenerator::new(Format::Text)
        .generate(&result, Some(&sequence.preview(100)), &Local::now())
        .unwrap();
    assert!(report.contains(&format!("Predicted Disease: {}", result.predicted_disease)));
    assert!(report.contains("Sequence Length: 400 nucleotides"));
}

#[test]
fn test_context_without_model_is_not_ready() {
    let env = common::TestEnvironment::new();
    let config = test_config(&env);

    let context = PredictionContext::initialize(&config);
    assert!(!context.is_ready());
    assert!(context.not_ready_reason().is_some());

    let raw = common::cycling_sequence(80);
    assert!(context.validate_input(&raw).valid);
    assert!(matches!(
        context.predict_raw(&raw),
        Err(DnaRiskError::ModelNotReady)
    ));
}

#[test]
fn test_load_context_skips_history() {
    let env = common::TestEnvironment::new();
    let config = test_config(&env);
    train_model(&quick_training())
        .unwrap()
        .bundle
        .save(&config.model.model_path)
        .unwrap();

    let context = PredictionContext::load(&config);
    assert!(context.is_ready());
    assert!(context.history().is_none());
    context.predict_raw(&common::cycling_sequence(120)).unwrap();
    assert!(!config.storage.database_path.exists());
}

#[test]
fn test_corrupt_model_file_leaves_context_not_ready() {
    let env = common::TestEnvironment::new();
    let config = test_config(&env);
    std::fs::create_dir_all(env.path("models")).unwrap();
    std::fs::write(&config.model.model_path, "{ not json").unwrap();

    assert!(matches!(
        ModelBundle::load(&config.model.model_path),
        Err(DnaRiskError::Model(_))
    ));
    assert!(!PredictionContext::load(&config).is_ready());
}
