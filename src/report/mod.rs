use crate::core::predictor::PredictionResult;
use anyhow::Result;
use chrono::{DateTime, Local};

pub mod json;
pub mod text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            _ => Err(format!("Unknown report format: {}", s)),
        }
    }
}

pub struct ReportGenerator {
    format: Format,
}

impl ReportGenerator {
    pub fn new(format: Format) -> Self {
        Self { format }
    }

    pub fn generate(
        &self,
        result: &PredictionResult,
        sequence_preview: Option<&str>,
        generated_at: &DateTime<Local>,
    ) -> Result<String> {
        match self.format {
            Format::Text => text::generate_text_report(result, generated_at),
            Format::Json => json::generate_json_report(result, sequence_preview, generated_at),
        }
    }
}

/// File name for a report downloaded at `generated_at`.
pub fn report_file_name(generated_at: &DateTime<Local>, format: Format) -> String {
    let extension = match format {
        Format::Text => "txt",
        Format::Json => "json",
    };
    format!(
        "dna_prediction_report_{}.{}",
        generated_at.format("%Y%m%d_%H%M%S"),
        extension
    )
}
