//! CLI command for plan export

use crate::error::AdvisorResult;
use crate::export::{export_items_csv, export_plan_json, export_plan_yaml, PlanExport};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

use super::report::write_output;
use super::PlanSession;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (line items only)
    Csv,
    /// JSON format (full plan)
    Json,
    /// YAML format (full plan, human-readable)
    Yaml,
}

/// Export options
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(session: &PlanSession, args: ExportArgs) -> AdvisorResult<()> {
    let export = PlanExport::new(&session.inputs, &session.outcome);

    match args.format {
        ExportFormat::Csv => write_output(&args.output, "Line items", |w| {
            export_items_csv(&session.outcome.adjusted_catalog, w)
        }),
        ExportFormat::Json => write_output(&args.output, "Plan", |w| {
            export_plan_json(&export, w, args.pretty)
        }),
        ExportFormat::Yaml => write_output(&args.output, "Plan", |w| export_plan_yaml(&export, w)),
    }
}
