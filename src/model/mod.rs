//! Bag-of-k-mers vectorizer, classifier and the serialized model bundle.

pub mod bundle;
pub mod classifier;
pub mod synthetic;
pub mod train;
pub mod vectorizer;

pub use bundle::ModelBundle;
pub use classifier::{CentroidClassifier, Classifier};
pub use train::{train_model, ClassMetrics, TrainingConfig, TrainingOutcome};
pub use vectorizer::KmerVectorizer;
