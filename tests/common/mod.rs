/// Shared fixtures for the integration tests
use std::path::PathBuf;
use tempfile::TempDir;

/// A valid sequence of `len` bases cycling through `ACGT`.
#[allow(dead_code)]
pub fn cycling_sequence(len: usize) -> String {
    "ACGT".chars().cycle().take(len).collect()
}

/// Isolated dnarisk home directory for one test.
pub struct TestEnvironment {
    temp_dir: TempDir,
}

#[allow(dead_code)]
impl TestEnvironment {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        TestEnvironment { temp_dir }
    }

    pub fn home(&self) -> PathBuf {
        self.temp_dir.path().to_path_buf()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.temp_dir.path().join(relative)
    }

    /// Command for the dnarisk binary pointed at this environment.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("dnarisk").expect("binary builds");
        cmd.env("DNARISK_HOME", self.home())
            .env_remove("DNARISK_DATA_DIR")
            .env_remove("DNARISK_MODELS_DIR")
            .env_remove("DNARISK_CONFIG")
            .env("DNARISK_LOG", "error")
            .env("NO_COLOR", "1");
        cmd
    }
}
