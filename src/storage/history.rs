use crate::core::predictor::PredictionResult;
use crate::DnaRiskError;
use chrono::Local;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One stored prediction, newest first when listed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: String,
    pub sequence_length: usize,
    pub gc_content: f64,
    pub predicted_disease: String,
    /// Percentage, as shown to users
    pub confidence: f64,
    pub risk_level: String,
}

/// SQLite-backed log of past predictions.
pub struct PredictionHistory {
    conn: Connection,
}

impl PredictionHistory {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DnaRiskError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        tracing::debug!("Opened prediction history at {}", path.display());
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, DnaRiskError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, DnaRiskError> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS predictions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                timestamp TEXT NOT NULL,
                sequence_length INTEGER NOT NULL,
                gc_content REAL NOT NULL,
                predicted_disease TEXT NOT NULL,
                confidence REAL NOT NULL,
                risk_level TEXT NOT NULL
            );",
        )?;
        Ok(Self { conn })
    }

    /// Store a prediction stamped with the current local time.
    pub fn save(&self, result: &PredictionResult) -> Result<i64, DnaRiskError> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        self.conn.execute(
            "INSERT INTO predictions
                (timestamp, sequence_length, gc_content, predicted_disease, confidence, risk_level)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                timestamp,
                result.statistics.length as i64,
                result.statistics.gc_content,
                result.predicted_disease,
                result.confidence,
                result.risk_level.as_str(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn recent(&self, limit: usize) -> Result<Vec<HistoryEntry>, DnaRiskError> {
        let mut stmt = self.conn.prepare(
            "SELECT timestamp, sequence_length, gc_content, predicted_disease, confidence, risk_level
             FROM predictions
             ORDER BY id DESC
             LIMIT ?1",
        )?;

        let rows = stmt.query_map(params![limit as i64], |row| {
            Ok(HistoryEntry {
                timestamp: row.get(0)?,
                sequence_length: row.get::<_, i64>(1)? as usize,
                gc_content: row.get(2)?,
                predicted_disease: row.get(3)?,
                confidence: row.get(4)?,
                risk_level: row.get(5)?,
            })
        })?;

        let entries = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    pub fn count(&self) -> Result<usize, DnaRiskError> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM predictions", [], |row| row.get(0))?;
        Ok(n as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bio::statistics;
    use crate::core::risk::RiskLevel;
    use indexmap::IndexMap;
    use tempfile::TempDir;

    fn result(disease: &str, confidence: f64) -> PredictionResult {
        PredictionResult {
            predicted_disease: disease.to_string(),
            confidence,
            risk_level: RiskLevel::from_confidence(confidence / 100.0),
            disease_probabilities: IndexMap::new(),
            statistics: statistics(&"ACGT".repeat(20)),
        }
    }

    #[test]
    fn test_recent_is_newest_first_and_limited() {
        let history = PredictionHistory::open_in_memory().unwrap();
        history.save(&result("Healthy", 55.0)).unwrap();
        history.save(&result("Cancer_Risk", 81.5)).unwrap();
        history.save(&result("Heart_Disease", 20.0)).unwrap();

        let entries = history.recent(2).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].predicted_disease, "Heart_Disease");
        assert_eq!(entries[0].risk_level, "Low");
        assert_eq!(entries[1].predicted_disease, "Cancer_Risk");
        assert_eq!(entries[1].sequence_length, 80);
        assert_eq!(entries[1].gc_content, 50.0);
        assert_eq!(history.count().unwrap(), 3);
    }

    #[test]
    fn test_history_persists_across_opens() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("predictions.db");

        PredictionHistory::open(&path)
            .unwrap()
            .save(&result("Healthy", 90.0))
            .unwrap();

        let reopened = PredictionHistory::open(&path).unwrap();
        assert_eq!(reopened.recent(10).unwrap()[0].risk_level, "High");
    }

    #[test]
    fn test_confidence_is_stored_as_shown_percentage() {
        let history = PredictionHistory::open_in_memory().unwrap();
        history.save(&result("Cancer_Risk", 81.53)).unwrap();

        let entry = &history.recent(1).unwrap()[0];
        assert_eq!(entry.confidence, 81.53);
        assert_eq!(entry.risk_level, "High");
    }
}
