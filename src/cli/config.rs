//! CLI commands for settings
//!
//! Show, initialize and update the saved plan defaults.

use clap::Subcommand;
use std::path::PathBuf;

use crate::config::{AdvisorPaths, Settings};
use crate::error::{AdvisorError, AdvisorResult};
use crate::models::{Money, RiskTier};

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the config location and saved settings
    Show,

    /// Write a settings file with default values
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },

    /// Set the default monthly income
    SetIncome { amount: Money },

    /// Set the default monthly savings goal
    SetSavingsGoal { amount: Money },

    /// Set the savings already set aside
    SetCurrentSavings { amount: Money },

    /// Set the default risk tolerance (low, medium, high)
    SetRisk { tier: RiskTier },

    /// Set the default spending cuts
    SetCuts {
        /// Cut to critical and essential items (0-100)
        #[arg(long)]
        essential: Option<f64>,

        /// Cut to discretionary, nice-to-have and investment items (0-100)
        #[arg(long)]
        discretionary: Option<f64>,
    },

    /// Set the currency code shown after amounts
    SetCurrency { code: String },

    /// Set the catalog file; omit the path to use the built-in catalog
    SetCatalog { path: Option<PathBuf> },

    /// Set the default projection length in months
    SetProjectionMonths { months: u32 },
}

/// Handle config commands
///
/// `init` never reads the existing settings file, so it can replace one that
/// no longer parses.
pub fn handle_config_command(paths: &AdvisorPaths, cmd: ConfigCommands) -> AdvisorResult<()> {
    match cmd {
        ConfigCommands::Init { force } => {
            if paths.is_initialized() && !force {
                return Err(AdvisorError::Config(format!(
                    "Settings already exist at {} (use --force to overwrite)",
                    paths.settings_file().display()
                )));
            }
            Settings::default().save(paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
            Ok(())
        }
        ConfigCommands::Show => {
            let settings = Settings::load_or_create(paths)?;
            print!("{}", format_settings(paths, &settings));
            Ok(())
        }
        cmd => {
            let updated = apply_update(Settings::load_or_create(paths)?, cmd)?;
            updated.save(paths)?;
            println!("Settings saved to: {}", paths.settings_file().display());
            Ok(())
        }
    }
}

/// Apply a `set-*` command, rejecting values a plan would not accept
fn apply_update(mut settings: Settings, cmd: ConfigCommands) -> AdvisorResult<Settings> {
    match cmd {
        ConfigCommands::SetIncome { amount } => settings.monthly_income = amount,
        ConfigCommands::SetSavingsGoal { amount } => settings.savings_goal = amount,
        ConfigCommands::SetCurrentSavings { amount } => settings.current_savings = amount,
        ConfigCommands::SetRisk { tier } => settings.risk_tier = tier,
        ConfigCommands::SetCuts {
            essential,
            discretionary,
        } => {
            if let Some(pct) = essential {
                settings.essential_cut_pct = pct;
            }
            if let Some(pct) = discretionary {
                settings.discretionary_cut_pct = pct;
            }
        }
        ConfigCommands::SetCurrency { code } => {
            let code = code.trim().to_uppercase();
            if code.is_empty() {
                return Err(AdvisorError::Validation(
                    "Currency code cannot be empty".into(),
                ));
            }
            settings.currency_code = code;
        }
        ConfigCommands::SetCatalog { path } => settings.catalog_file = path,
        ConfigCommands::SetProjectionMonths { months } => settings.projection_months = months,
        ConfigCommands::Show | ConfigCommands::Init { .. } => {}
    }

    settings.plan_inputs().validate()?;
    Ok(settings)
}

fn format_settings(paths: &AdvisorPaths, settings: &Settings) -> String {
    let code = settings.currency_code.as_str();
    let mut output = String::new();

    output.push_str("Budget Advisor Configuration\n");
    output.push_str("============================\n");
    output.push_str(&format!("Config directory: {}\n", paths.base_dir().display()));
    output.push_str(&format!(
        "Settings file:    {}{}\n",
        paths.settings_file().display(),
        if paths.is_initialized() { "" } else { " (not created)" }
    ));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!("  Currency:            {}\n", code));
    output.push_str(&format!(
        "  Monthly income:      {}\n",
        settings.monthly_income.format_with_code(code)
    ));
    output.push_str(&format!(
        "  Savings goal:        {}\n",
        settings.savings_goal.format_with_code(code)
    ));
    output.push_str(&format!(
        "  Current savings:     {}\n",
        settings.current_savings.format_with_code(code)
    ));
    output.push_str(&format!("  Risk tolerance:      {}\n", settings.risk_tier));
    output.push_str(&format!(
        "  Essential cut:       {}%\n",
        settings.essential_cut_pct
    ));
    output.push_str(&format!(
        "  Discretionary cut:   {}%\n",
        settings.discretionary_cut_pct
    ));
    output.push_str(&format!(
        "  Projection months:   {}\n",
        settings.projection_months
    ));
    output.push_str(&format!(
        "  Catalog:             {}\n",
        settings
            .catalog_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in".to_string())
    ));

    output
}
