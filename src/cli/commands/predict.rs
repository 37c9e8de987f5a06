use super::SequenceInput;
use crate::bio::fasta::parse_records;
use crate::cli::output::*;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::predictor::{PredictionContext, PredictionResult, RecordPrediction};
use crate::report::{report_file_name, Format, ReportGenerator};
use crate::DnaRiskError;
use chrono::Local;
use clap::Args;
use comfy_table::Cell;
use std::path::PathBuf;

const PREVIEW_LENGTH: usize = 200;

#[derive(Args)]
pub struct PredictArgs {
    #[command(flatten)]
    pub input: SequenceInput,

    /// Model bundle to use (overrides the configured path)
    #[arg(short, long, value_name = "FILE")]
    pub model: Option<PathBuf>,

    /// Also write a report file (.json for JSON, otherwise text); a directory
    /// gets a timestamped file name
    #[arg(short, long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Classify every FASTA record separately instead of joining them
    #[arg(long, conflicts_with = "report")]
    pub per_record: bool,

    /// Do not record this prediction in the history store
    #[arg(long)]
    pub no_history: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn run(args: PredictArgs, config: &Config) -> anyhow::Result<()> {
    let mut config = config.clone();
    if let Some(model) = &args.model {
        config.model.model_path = model.clone();
    }

    let context = if args.no_history {
        PredictionContext::load(&config)
    } else {
        PredictionContext::initialize(&config)
    };
    if !context.is_ready() {
        return Err(DnaRiskError::ModelNotReady.into());
    }

    let raw = args.input.read_raw()?;
    if args.per_record {
        let records = parse_records(&raw)?;
        if records.is_empty() {
            anyhow::bail!("No FASTA records found in {}", args.input.describe());
        }
        let predictions = context.predict_records(&records)?;
        match args.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&predictions)?),
            OutputFormat::Text => print_record_predictions(&predictions),
        }
        return Ok(());
    }

    let (sequence, result) = context.predict_raw(&raw)?;
    let generated_at = Local::now();

    match args.format {
        OutputFormat::Json => {
            let json = ReportGenerator::new(Format::Json).generate(
                &result,
                Some(&sequence.preview(PREVIEW_LENGTH)),
                &generated_at,
            )?;
            println!("{}", json);
        }
        OutputFormat::Text => print_prediction(&result),
    }

    if let Some(target) = &args.report {
        let (path, format) = if target.is_dir() {
            let format = match args.format {
                OutputFormat::Json => Format::Json,
                OutputFormat::Text => Format::Text,
            };
            (target.join(report_file_name(&generated_at, format)), format)
        } else {
            let format = target
                .extension()
                .and_then(|e| e.to_str())
                .and_then(|e| e.parse::<Format>().ok())
                .unwrap_or(Format::Text);
            (target.clone(), format)
        };

        let report = ReportGenerator::new(format).generate(
            &result,
            Some(&sequence.preview(PREVIEW_LENGTH)),
            &generated_at,
        )?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&path, report)?;
        tracing::info!("Report written to {}", path.display());
        if args.format == OutputFormat::Text {
            success(&format!("Report written to {}", path.display()));
        }
    }

    Ok(())
}

fn print_prediction(result: &PredictionResult) {
    section_header("Disease Risk Prediction");
    tree_item(false, "Predicted Disease", Some(&result.predicted_disease));
    tree_item(false, "Confidence", Some(&format!("{:.2}%", result.confidence)));
    tree_item(
        true,
        "Risk Level",
        Some(&risk_label(result.risk_level).to_string()),
    );

    subsection_header("Sequence");
    print_statistics(&result.statistics, true);

    subsection_header("Disease Probabilities");
    let mut table = create_standard_table();
    table.set_header(vec![header_cell("Disease"), header_cell("Probability")]);
    for (disease, probability) in &result.disease_probabilities {
        table.add_row(vec![
            Cell::new(disease),
            Cell::new(format!("{:.2}%", probability)),
        ]);
    }
    println!("{}", table);

    println!();
    warning("Educational and research use only. Not a medical diagnosis.");
}

fn print_record_predictions(predictions: &[RecordPrediction]) {
    section_header("Disease Risk Prediction per Record");
    let mut table = create_standard_table();
    table.set_header(vec![
        header_cell("Record"),
        header_cell("Length"),
        header_cell("Predicted Disease"),
        header_cell("Confidence"),
        header_cell("Risk"),
    ]);

    for prediction in predictions {
        let row = match (&prediction.result, &prediction.error) {
            (Some(result), _) => vec![
                Cell::new(&prediction.id),
                Cell::new(format_number(result.statistics.length)),
                Cell::new(&result.predicted_disease),
                Cell::new(format!("{:.2}%", result.confidence)),
                Cell::new(risk_label(result.risk_level).to_string()),
            ],
            (None, error) => vec![
                Cell::new(&prediction.id),
                Cell::new("-"),
                Cell::new(error.as_deref().unwrap_or("not classified")),
                Cell::new("-"),
                Cell::new("-"),
            ],
        };
        table.add_row(row);
    }
    println!("{}", table);

    let classified = predictions.iter().filter(|p| p.result.is_some()).count();
    info(&format!(
        "{} of {} records classified",
        format_number(classified),
        format_number(predictions.len())
    ));
    println!();
    warning("Educational and research use only. Not a medical diagnosis.");
}
