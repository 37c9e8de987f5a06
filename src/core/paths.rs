use std::path::PathBuf;
use std::sync::OnceLock;

// Cache the paths to avoid repeated environment lookups
static DNARISK_HOME: OnceLock<PathBuf> = OnceLock::new();
static DNARISK_DATA_DIR: OnceLock<PathBuf> = OnceLock::new();
static DNARISK_MODELS_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the dnarisk home directory
/// Checks DNARISK_HOME environment variable, falls back to ${HOME}/.dnarisk
pub fn dnarisk_home() -> PathBuf {
    DNARISK_HOME
        .get_or_init(|| {
            if let Ok(path) = std::env::var("DNARISK_HOME") {
                PathBuf::from(path)
            } else {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".dnarisk")
            }
        })
        .clone()
}

/// Get the data directory holding the prediction history
/// Checks DNARISK_DATA_DIR environment variable, falls back to DNARISK_HOME/data
pub fn data_dir() -> PathBuf {
    DNARISK_DATA_DIR
        .get_or_init(|| {
            if let Ok(path) = std::env::var("DNARISK_DATA_DIR") {
                PathBuf::from(path)
            } else {
                dnarisk_home().join("data")
            }
        })
        .clone()
}

/// Get the directory holding trained model bundles
/// Checks DNARISK_MODELS_DIR environment variable, falls back to DNARISK_HOME/models
pub fn models_dir() -> PathBuf {
    DNARISK_MODELS_DIR
        .get_or_init(|| {
            if let Ok(path) = std::env::var("DNARISK_MODELS_DIR") {
                PathBuf::from(path)
            } else {
                dnarisk_home().join("models")
            }
        })
        .clone()
}

pub fn default_model_path() -> PathBuf {
    models_dir().join("dna_disease_model.json")
}

pub fn default_database_path() -> PathBuf {
    data_dir().join("predictions.db")
}

pub fn default_config_path() -> PathBuf {
    dnarisk_home().join("config.toml")
}

/// Get a human-readable description of the current path configuration
pub fn describe_paths() -> String {
    format!(
        "dnarisk Paths:\n  \
        Home: {}\n  \
        Data: {}\n  \
        Models: {}",
        dnarisk_home().display(),
        data_dir().display(),
        models_dir().display(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_files_live_under_their_dirs() {
        assert!(default_model_path().starts_with(models_dir()));
        assert!(default_model_path().ends_with("dna_disease_model.json"));
        assert!(default_database_path().ends_with("predictions.db"));
        assert!(default_config_path().ends_with("config.toml"));
    }
}
