use crate::core::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub validation: ValidationConfig,
    pub features: FeatureConfig,
    pub model: ModelConfig,
    pub storage: StorageConfig,
    pub risk: RiskConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub min_sequence_length: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// K-mer length used for training and prediction
    pub kmer_size: usize,
    /// Vocabulary cap for the k-mer vectorizer
    pub max_features: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub model_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub database_path: PathBuf,
    /// Rows shown by `history` when no limit is given
    pub history_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    pub high_threshold: f64,
    pub medium_threshold: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_sequence_length: crate::bio::MIN_SEQUENCE_LENGTH,
        }
    }
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            kmer_size: 4,
            max_features: 1000,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_path: paths::default_model_path(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: paths::default_database_path(),
            history_limit: 20,
        }
    }
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            high_threshold: 0.7,
            medium_threshold: 0.4,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), crate::DnaRiskError> {
        if self.features.kmer_size == 0 {
            return Err(crate::DnaRiskError::Config(
                "features.kmer_size must be at least 1".to_string(),
            ));
        }
        if self.features.max_features == 0 {
            return Err(crate::DnaRiskError::Config(
                "features.max_features must be at least 1".to_string(),
            ));
        }
        let risk = &self.risk;
        if !(0.0..=1.0).contains(&risk.medium_threshold)
            || !(0.0..=1.0).contains(&risk.high_threshold)
            || risk.medium_threshold > risk.high_threshold
        {
            return Err(crate::DnaRiskError::Config(format!(
                "risk thresholds must satisfy 0 <= medium ({}) <= high ({}) <= 1",
                risk.medium_threshold, risk.high_threshold
            )));
        }
        Ok(())
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, crate::DnaRiskError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| crate::DnaRiskError::Config(format!("Failed to parse config: {}", e)))?;
    config.validate()?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), crate::DnaRiskError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| crate::DnaRiskError::Config(format!("Failed to serialize config: {}", e)))?;
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}

/// Config from an explicit file, else the default config file if present,
/// else built-in defaults.
pub fn resolve_config(explicit: Option<&Path>) -> Result<Config, crate::DnaRiskError> {
    if let Some(path) = explicit {
        tracing::debug!("Loading config from {}", path.display());
        return load_config(path);
    }

    let default_path = paths::default_config_path();
    if default_path.exists() {
        tracing::debug!("Loading config from {}", default_path.display());
        load_config(default_path)
    } else {
        Ok(default_config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
[features]
kmer_size = 3

[risk]
high_threshold = 0.8
"#,
        )
        .unwrap();

        assert_eq!(config.features.kmer_size, 3);
        assert_eq!(config.features.max_features, 1000);
        assert_eq!(config.risk.high_threshold, 0.8);
        assert_eq!(config.risk.medium_threshold, 0.4);
        assert_eq!(config.validation.min_sequence_length, 50);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = default_config();
        config.storage.history_limit = 5;
        save_config(&path, &config).unwrap();

        assert_eq!(load_config(&path).unwrap(), config);
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[risk]\nhigh_threshold = 0.3\nmedium_threshold = 0.5\n").unwrap();

        assert!(matches!(
            load_config(&path),
            Err(crate::DnaRiskError::Config(_))
        ));
    }

    #[test]
    fn test_explicit_missing_file_is_io_error() {
        let result = resolve_config(Some(Path::new("/nonexistent/dnarisk.toml")));
        assert!(matches!(result, Err(crate::DnaRiskError::Io(_))));
    }
}
