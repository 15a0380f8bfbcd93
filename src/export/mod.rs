//! Export module for the budget advisor
//!
//! Provides plan export in multiple formats:
//! - CSV: Line items with original and adjusted amounts (spreadsheet-compatible)
//! - JSON: Machine-readable full plan export
//! - YAML: Human-readable full plan export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_items_csv;
pub use json::{export_plan_json, ExportMetadata, PlanExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_plan_yaml;
