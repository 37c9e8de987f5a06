use crate::core::predictor::PredictionResult;
use anyhow::Result;
use chrono::{DateTime, Local};
use std::fmt::Write;

const WIDTH: usize = 60;

pub fn generate_text_report(result: &PredictionResult, generated_at: &DateTime<Local>) -> Result<String> {
    let mut output = String::new();
    let heavy = "=".repeat(WIDTH);
    let light = "-".repeat(WIDTH);
    let stats = &result.statistics;

    // Header
    writeln!(&mut output)?;
    writeln!(&mut output, "DNA DISEASE PREDICTION REPORT")?;
    writeln!(&mut output, "{}", heavy)?;
    writeln!(&mut output)?;
    writeln!(&mut output, "Date: {}", generated_at.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(&mut output)?;

    // Sequence
    writeln!(&mut output, "SEQUENCE INFORMATION")?;
    writeln!(&mut output, "{}", light)?;
    writeln!(&mut output, "Sequence Length: {} nucleotides", stats.length)?;
    writeln!(&mut output, "GC Content: {:?}%", stats.gc_content)?;
    writeln!(&mut output)?;
    writeln!(&mut output, "Nucleotide Frequencies:")?;
    for (base, freq) in stats.nucleotide_frequency.entries() {
        writeln!(&mut output, "  {}: {:?}%", base, freq)?;
    }
    writeln!(&mut output)?;

    // Prediction
    writeln!(&mut output, "PREDICTION RESULTS")?;
    writeln!(&mut output, "{}", light)?;
    writeln!(&mut output, "Predicted Disease: {}", result.predicted_disease)?;
    writeln!(&mut output, "Confidence: {:?}%", result.confidence)?;
    writeln!(&mut output, "Risk Level: {}", result.risk_level)?;
    writeln!(&mut output)?;

    writeln!(&mut output, "DISEASE PROBABILITIES")?;
    writeln!(&mut output, "{}", light)?;
    for (disease, prob) in &result.disease_probabilities {
        writeln!(&mut output, "{}: {:?}%", disease, prob)?;
    }
    writeln!(&mut output)?;
    writeln!(&mut output, "{}", light)?;
    writeln!(&mut output)?;

    // Disclaimer
    writeln!(&mut output, "MEDICAL DISCLAIMER")?;
    writeln!(&mut output, "{}", light)?;
    writeln!(&mut output, "This prediction is generated by a machine learning model for")?;
    writeln!(&mut output, "educational and research purposes only. It should NOT be used")?;
    writeln!(&mut output, "for medical diagnosis or treatment decisions. Always consult")?;
    writeln!(&mut output, "with qualified healthcare professionals for medical advice.")?;
    writeln!(&mut output)?;
    writeln!(&mut output, "{}", heavy)?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bio::statistics;
    use crate::core::risk::RiskLevel;
    use chrono::TimeZone;
    use indexmap::IndexMap;

    #[test]
    fn test_report_sections() {
        let mut probabilities = IndexMap::new();
        probabilities.insert("Healthy".to_string(), 72.5);
        probabilities.insert("Cancer_Risk".to_string(), 27.5);
        let result = PredictionResult {
            predicted_disease: "Healthy".to_string(),
            confidence: 72.5,
            risk_level: RiskLevel::High,
            disease_probabilities: probabilities,
            statistics: statistics(&"A".repeat(52)),
        };
        let when = Local.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();

        let report = generate_text_report(&result, &when).unwrap();
        assert!(report.contains("Date: 2024-03-01 12:30:00"));
        assert!(report.contains("Sequence Length: 52 nucleotides"));
        assert!(report.contains("GC Content: 0.0%"));
        assert!(report.contains("  A: 100.0%"));
        assert!(report.contains("  T: 0.0%"));
        assert!(report.contains("Confidence: 72.5%"));
        assert!(report.contains("Risk Level: High"));
        assert!(report.find("Healthy: 72.5%").unwrap() < report.find("Cancer_Risk: 27.5%").unwrap());
        assert!(report.contains("MEDICAL DISCLAIMER"));
    }
}
