//! Display formatting for terminal output
//!
//! Provides utilities for formatting plans and catalogs for terminal display.

pub mod catalog;
pub mod plan;
pub mod report;

pub use catalog::format_catalog_table;
pub use plan::format_plan;
