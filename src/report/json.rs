use crate::core::predictor::PredictionResult;
use anyhow::Result;
use chrono::{DateTime, Local};
use serde_json::json;

pub fn generate_json_report(
    result: &PredictionResult,
    sequence_preview: Option<&str>,
    generated_at: &DateTime<Local>,
) -> Result<String> {
    let report = json!({
        "generated_at": generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        "sequence": sequence_preview,
        "result": result,
    });
    Ok(serde_json::to_string_pretty(&report)?)
}
