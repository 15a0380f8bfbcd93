//! CLI commands for reports
//!
//! Provides commands for generating and exporting the plan reports.

use crate::error::{AdvisorError, AdvisorResult};
use crate::models::{Flexibility, Priority};
use crate::reports::expense_breakdown::DEFAULT_TOP_N;
use crate::reports::{
    parse_start_month, AdjustmentFilter, AdjustmentSummaryReport, BreakdownFilter,
    ExpenseBreakdownReport, SavingsProjectionReport,
};
use clap::Subcommand;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::PlanSession;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Original versus adjusted spending, by priority
    #[command(alias = "adjustment")]
    Adjustments {
        /// Only list items with these priorities (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        priority: Vec<Priority>,

        /// List every item, not only the adjusted ones
        #[arg(long)]
        all_items: bool,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Spending by category and priority, with a filtered item list
    Breakdown {
        /// Only list items with these priorities (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        priority: Vec<Priority>,

        /// Only list items in these categories (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        category: Vec<String>,

        /// Only list items with these flexibilities (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        flexibility: Vec<Flexibility>,

        /// Number of largest expenses to show
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top: usize,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Month-by-month savings growth under one option
    Projection {
        /// Budget option to follow (1 or 2)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=2))]
        option: u8,

        /// Number of months (defaults to the configured projection length)
        #[arg(short, long)]
        months: Option<u32>,

        /// First month (YYYY-MM); defaults to the current month
        #[arg(short, long)]
        start: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(session: &PlanSession, cmd: ReportCommands) -> AdvisorResult<()> {
    match cmd {
        ReportCommands::Adjustments {
            priority,
            all_items,
            output,
        } => {
            let filter = AdjustmentFilter {
                priorities: priority,
                adjusted_only: !all_items,
            };
            let report = AdjustmentSummaryReport::generate(
                &session.outcome.adjusted_catalog,
                session.inputs.monthly_income,
                &filter,
            );
            match output {
                Some(path) => write_output(&path, "Adjustment report", |w| report.export_csv(w)),
                None => {
                    if !report.has_adjustments() {
                        println!("No adjustments were needed.\n");
                    }
                    println!("{}", report.format_terminal());
                    Ok(())
                }
            }
        }
        ReportCommands::Breakdown {
            priority,
            category,
            flexibility,
            top,
            output,
        } => {
            let filter = BreakdownFilter {
                priorities: priority,
                categories: category,
                flexibilities: flexibility,
            };
            let report = ExpenseBreakdownReport::generate(
                &session.outcome.adjusted_catalog,
                session.inputs.monthly_income,
                &filter,
                top,
            );
            match output {
                Some(path) => write_output(&path, "Breakdown report", |w| report.export_csv(w)),
                None => {
                    println!("{}", report.format_terminal());
                    Ok(())
                }
            }
        }
        ReportCommands::Projection {
            option,
            months,
            start,
            output,
        } => {
            let chosen = session
                .outcome
                .budget_options
                .get(usize::from(option))
                .ok_or_else(|| AdvisorError::Validation(format!("No option {}", option)))?;
            let start = match start {
                Some(s) => parse_start_month(&s)?,
                None => chrono::Local::now().date_naive(),
            };
            let months = months.unwrap_or(session.settings.projection_months);

            debug!(option, months, %start, "projecting savings");
            let report = SavingsProjectionReport::generate(
                chosen,
                session.inputs.current_savings,
                start,
                months,
            );
            match output {
                Some(path) => write_output(&path, "Projection", |w| report.export_csv(w)),
                None => {
                    println!("{}", report.format_terminal());
                    Ok(())
                }
            }
        }
    }
}

/// Create `path` and hand a buffered writer to `export`
pub(crate) fn write_output<F>(path: &Path, what: &str, export: F) -> AdvisorResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> AdvisorResult<()>,
{
    let file = File::create(path).map_err(|e| {
        AdvisorError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    export(&mut writer)?;
    writer
        .flush()
        .map_err(|e| AdvisorError::Export(e.to_string()))?;

    println!("{} exported to: {}", what, path.display());
    Ok(())
}
