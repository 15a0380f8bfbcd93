//! YAML Export functionality
//!
//! Exports a plan to YAML format for human-readable review.

use crate::error::{AdvisorError, AdvisorResult};
use crate::export::json::PlanExport;
use std::io::Write;

/// Export a plan to YAML format
pub fn export_plan_yaml<W: Write>(export: &PlanExport<'_>, writer: &mut W) -> AdvisorResult<()> {
    // Add a header comment
    writeln!(writer, "# Budget Advisor Plan Export")
        .map_err(|e| AdvisorError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| AdvisorError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| AdvisorError::Export(e.to_string()))?;
    writeln!(writer, "#").map_err(|e| AdvisorError::Export(e.to_string()))?;
    writeln!(
        writer,
        "# Amounts are stored in hundredths of the currency unit."
    )
    .map_err(|e| AdvisorError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| AdvisorError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| AdvisorError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use crate::services::{run_plan, PlanInputs};

    #[test]
    fn test_yaml_export() {
        let inputs = PlanInputs::default();
        let outcome = run_plan(&inputs, &default_catalog(inputs.monthly_income));
        let export = PlanExport::new(&inputs, &outcome);

        let mut buf = Vec::new();
        export_plan_yaml(&export, &mut buf).unwrap();
        let yaml = String::from_utf8(buf).unwrap();

        assert!(yaml.starts_with("# Budget Advisor Plan Export"));
        assert!(yaml.contains("schema_version:"));
        assert!(yaml.contains("adjusted_catalog:"));

        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(value["metadata"]["item_count"].as_u64(), Some(36));
        assert_eq!(
            value["outcome"]["totals"]["total_fixed_expenses"].as_i64(),
            Some(245_850_000)
        );
    }
}
