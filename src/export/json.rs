//! JSON Export functionality
//!
//! Exports a plan (its inputs and every computed output) to JSON with schema
//! versioning.

use crate::error::{AdvisorError, AdvisorResult};
use crate::services::{PlanInputs, PlanOutcome};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full plan export structure
#[derive(Debug, Clone, Serialize)]
pub struct PlanExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub inputs: &'a PlanInputs,

    pub outcome: &'a PlanOutcome,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize)]
pub struct ExportMetadata {
    /// Total number of line items
    pub item_count: usize,

    /// Items whose amount differs from the original
    pub adjusted_item_count: usize,

    /// Whether expenses fit within income after adjustment
    pub balanced: bool,
}

impl<'a> PlanExport<'a> {
    pub fn new(inputs: &'a PlanInputs, outcome: &'a PlanOutcome) -> Self {
        let catalog = &outcome.adjusted_catalog;
        let metadata = ExportMetadata {
            item_count: catalog.len(),
            adjusted_item_count: catalog.iter().filter(|i| i.is_adjusted()).count(),
            balanced: outcome.residual_overspend.is_zero(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            inputs,
            outcome,
            metadata,
        }
    }
}

/// Export a plan to JSON
pub fn export_plan_json<W: Write>(
    export: &PlanExport<'_>,
    writer: &mut W,
    pretty: bool,
) -> AdvisorResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, export)
    } else {
        serde_json::to_writer(writer, export)
    }
    .map_err(|e| AdvisorError::Export(e.to_string()))?;

    Ok(())
}
