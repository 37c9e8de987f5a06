use crate::cli::output::*;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::risk::RiskLevel;
use crate::storage::{HistoryEntry, PredictionHistory};
use clap::Args;
use comfy_table::Cell;

#[derive(Args)]
pub struct HistoryArgs {
    /// Number of predictions to show (defaults to the configured limit)
    #[arg(short = 'n', long, value_name = "N")]
    pub limit: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn run(args: HistoryArgs, config: &Config) -> anyhow::Result<()> {
    let limit = args.limit.unwrap_or(config.storage.history_limit);
    let path = &config.storage.database_path;

    let (entries, total) = if path.exists() {
        let history = PredictionHistory::open(path)?;
        (history.recent(limit)?, history.count()?)
    } else {
        tracing::debug!("No history store at {}", path.display());
        (Vec::new(), 0)
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Text => print_history(&entries, total),
    }

    Ok(())
}

fn print_history(entries: &[HistoryEntry], total: usize) {
    section_header("Prediction History");
    if entries.is_empty() {
        info("No predictions recorded yet");
        return;
    }

    let mut table = create_standard_table();
    table.set_header(vec![
        header_cell("Timestamp"),
        header_cell("Length"),
        header_cell("GC %"),
        header_cell("Predicted Disease"),
        header_cell("Confidence"),
        header_cell("Risk"),
    ]);

    for entry in entries {
        let risk = match entry.risk_level.parse::<RiskLevel>() {
            Ok(level) => risk_label(level).to_string(),
            Err(_) => entry.risk_level.clone(),
        };
        table.add_row(vec![
            Cell::new(&entry.timestamp),
            Cell::new(format_number(entry.sequence_length)),
            Cell::new(format!("{:.2}", entry.gc_content)),
            Cell::new(&entry.predicted_disease),
            Cell::new(format!("{:.2}%", entry.confidence)),
            Cell::new(risk),
        ]);
    }
    println!("{}", table);
    info(&format!(
        "Showing {} of {} predictions",
        format_number(entries.len()),
        format_number(total)
    ));
}
