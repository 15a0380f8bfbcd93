//! Catalog sources
//!
//! - `defaults`: the built-in grocery and bill table
//! - `import`: user catalogs loaded from YAML, JSON or CSV

pub mod defaults;
pub mod import;

use std::path::Path;

use crate::error::AdvisorResult;
use crate::models::{Catalog, LineItemTemplate, Money};

pub use defaults::{default_catalog, default_templates};
pub use import::{load_templates, parse_templates, CatalogFormat};

/// Templates from `path` if given, otherwise the built-in table
pub fn resolve_templates(path: Option<&Path>) -> AdvisorResult<Vec<LineItemTemplate>> {
    match path {
        Some(p) => load_templates(p),
        None => Ok(default_templates()),
    }
}

/// Build the catalog for an income from `path` or the built-in table
pub fn load_catalog(path: Option<&Path>, monthly_income: Money) -> AdvisorResult<Catalog> {
    let templates = resolve_templates(path)?;
    Ok(Catalog::from_templates(&templates, monthly_income))
}
