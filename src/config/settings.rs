//! User settings for the budget advisor
//!
//! Persisted defaults for the plan inputs. Command-line flags override
//! whatever is stored here.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::AdvisorPaths;
use crate::error::AdvisorError;
use crate::models::{Money, RiskTier};
use crate::services::{PlanInputs, SpendingCuts};

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency code shown after amounts
    #[serde(default = "default_currency")]
    pub currency_code: String,

    #[serde(default = "default_income")]
    pub monthly_income: Money,

    #[serde(default)]
    pub current_savings: Money,

    #[serde(default = "default_savings_goal")]
    pub savings_goal: Money,

    #[serde(default)]
    pub risk_tier: RiskTier,

    #[serde(default)]
    pub essential_cut_pct: f64,

    #[serde(default)]
    pub discretionary_cut_pct: f64,

    /// Months covered by savings projections
    #[serde(default = "default_projection_months")]
    pub projection_months: u32,

    /// Catalog file used instead of the built-in table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_file: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "UGX".to_string()
}

fn default_income() -> Money {
    Money::from_units(5_000_000)
}

fn default_savings_goal() -> Money {
    Money::from_units(500_000)
}

fn default_projection_months() -> u32 {
    12
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_code: default_currency(),
            monthly_income: default_income(),
            current_savings: Money::zero(),
            savings_goal: default_savings_goal(),
            risk_tier: RiskTier::default(),
            essential_cut_pct: 0.0,
            discretionary_cut_pct: 0.0,
            projection_months: default_projection_months(),
            catalog_file: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &AdvisorPaths) -> Result<Self, AdvisorError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                AdvisorError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                AdvisorError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AdvisorPaths) -> Result<(), AdvisorError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            AdvisorError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            AdvisorError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Plan inputs seeded from these settings
    pub fn plan_inputs(&self) -> PlanInputs {
        PlanInputs {
            monthly_income: self.monthly_income,
            savings_goal: self.savings_goal,
            current_savings: self.current_savings,
            risk_tier: self.risk_tier,
            cuts: SpendingCuts::new(self.essential_cut_pct, self.discretionary_cut_pct),
            currency: self.currency_code.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_code, "UGX");
        assert_eq!(settings.monthly_income, Money::from_units(5_000_000));
        assert_eq!(settings.savings_goal, Money::from_units(500_000));
        assert_eq!(settings.risk_tier, RiskTier::Medium);
        assert_eq!(settings.projection_months, 12);
        assert!(settings.catalog_file.is_none());
    }

    #[test]
    fn test_plan_inputs_match_defaults() {
        assert_eq!(Settings::default().plan_inputs(), PlanInputs::default());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AdvisorPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AdvisorPaths::with_base_dir(temp_dir.path().join("advisor"));

        let settings = Settings {
            monthly_income: Money::from_units(3_200_000),
            risk_tier: RiskTier::High,
            discretionary_cut_pct: 15.0,
            catalog_file: Some(PathBuf::from("household.yaml")),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AdvisorPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"risk_tier": "low"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.risk_tier, RiskTier::Low);
        assert_eq!(loaded.currency_code, "UGX");
        assert_eq!(loaded.savings_goal, Money::from_units(500_000));
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AdvisorPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, AdvisorError::Config(_)));
    }
}
