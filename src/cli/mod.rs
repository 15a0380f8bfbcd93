//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod catalog;
pub mod config;
pub mod export;
pub mod plan;
pub mod report;

use std::path::{Path, PathBuf};

use clap::Args;

use crate::catalog::load_catalog;
use crate::config::Settings;
use crate::error::AdvisorResult;
use crate::models::{Catalog, Money, RiskTier};
use crate::services::{run_plan, PlanInputs, PlanOutcome, SpendingCuts};

pub use catalog::{handle_catalog_command, CatalogArgs};
pub use config::{handle_config_command, ConfigCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use plan::handle_plan_command;
pub use report::{handle_report_command, ReportCommands};

/// Plan inputs accepted by every subcommand
///
/// Anything left unset falls back to the saved settings.
#[derive(Args, Debug, Clone, Default)]
pub struct PlanArgs {
    /// Monthly income, e.g. 5000000 or 5,000,000
    #[arg(long, global = true, value_name = "AMOUNT")]
    pub income: Option<Money>,

    /// Monthly savings goal
    #[arg(long, global = true, value_name = "AMOUNT")]
    pub savings_goal: Option<Money>,

    /// Savings already set aside (used by projections)
    #[arg(long, global = true, value_name = "AMOUNT")]
    pub current_savings: Option<Money>,

    /// Risk tolerance: low, medium or high
    #[arg(long, global = true, value_name = "TIER")]
    pub risk: Option<RiskTier>,

    /// Percentage cut to critical and essential items (0-100)
    #[arg(long, global = true, value_name = "PCT")]
    pub essential_cut: Option<f64>,

    /// Percentage cut to discretionary, nice-to-have and investment items (0-100)
    #[arg(long, global = true, value_name = "PCT")]
    pub discretionary_cut: Option<f64>,

    /// Catalog file (YAML, JSON or CSV) to use instead of the built-in one
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Currency code shown after amounts
    #[arg(long, global = true, value_name = "CODE")]
    pub currency: Option<String>,
}

impl PlanArgs {
    /// Merge these flags over the saved settings
    pub fn resolve(&self, settings: &Settings) -> PlanInputs {
        let base = settings.plan_inputs();
        PlanInputs {
            monthly_income: self.income.unwrap_or(base.monthly_income),
            savings_goal: self.savings_goal.unwrap_or(base.savings_goal),
            current_savings: self.current_savings.unwrap_or(base.current_savings),
            risk_tier: self.risk.unwrap_or(base.risk_tier),
            cuts: SpendingCuts::new(
                self.essential_cut.unwrap_or(base.cuts.essential_pct),
                self.discretionary_cut.unwrap_or(base.cuts.discretionary_pct),
            ),
            currency: self.currency.clone().unwrap_or(base.currency),
        }
    }

    /// Catalog file from the flag, else from the settings
    pub fn catalog_path<'a>(&'a self, settings: &'a Settings) -> Option<&'a Path> {
        self.catalog
            .as_deref()
            .or(settings.catalog_file.as_deref())
    }
}

/// A computed plan and everything it was computed from
#[derive(Debug, Clone)]
pub struct PlanSession {
    pub settings: Settings,
    pub inputs: PlanInputs,
    /// Catalog as loaded, before cuts or adjustment
    pub catalog: Catalog,
    pub outcome: PlanOutcome,
}

impl PlanSession {
    /// Validate inputs, load the catalog and run the plan
    pub fn build(args: &PlanArgs, settings: Settings) -> AdvisorResult<Self> {
        let inputs = args.resolve(&settings);
        inputs.validate()?;

        let catalog = load_catalog(args.catalog_path(&settings), inputs.monthly_income)?;
        let outcome = run_plan(&inputs, &catalog);

        Ok(Self {
            settings,
            inputs,
            catalog,
            outcome,
        })
    }
}
