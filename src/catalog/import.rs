//! Catalog import
//!
//! Loads user-supplied catalog templates from YAML, JSON or CSV files. All
//! formats produce the same [`LineItemTemplate`] list, which is validated
//! before use.

use std::path::Path;

use csv::StringRecord;
use tracing::debug;

use crate::error::{AdvisorError, AdvisorResult};
use crate::models::{Flexibility, Frequency, ItemKind, LineItemTemplate, Price, Priority};

/// Supported catalog file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
    Csv,
}

impl CatalogFormat {
    /// Pick a format from a file extension
    pub fn from_path(path: &Path) -> AdvisorResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(AdvisorError::Import(format!(
                "Unsupported catalog file '{}': expected .yaml, .json or .csv",
                path.display()
            ))),
        }
    }
}

/// Load and validate templates from a file
pub fn load_templates(path: &Path) -> AdvisorResult<Vec<LineItemTemplate>> {
    let format = CatalogFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path).map_err(|e| {
        AdvisorError::Io(format!(
            "Failed to read catalog file {}: {}",
            path.display(),
            e
        ))
    })?;

    let templates = parse_templates(&contents, format)?;
    debug!(
        path = %path.display(),
        count = templates.len(),
        "loaded catalog templates"
    );
    Ok(templates)
}

/// Parse and validate templates from a string
pub fn parse_templates(
    contents: &str,
    format: CatalogFormat,
) -> AdvisorResult<Vec<LineItemTemplate>> {
    let templates: Vec<LineItemTemplate> = match format {
        CatalogFormat::Yaml => serde_yaml::from_str(contents)
            .map_err(|e| AdvisorError::Import(format!("Invalid YAML catalog: {}", e)))?,
        CatalogFormat::Json => serde_json::from_str(contents)
            .map_err(|e| AdvisorError::Import(format!("Invalid JSON catalog: {}", e)))?,
        CatalogFormat::Csv => parse_csv(contents)?,
    };

    validate_templates(&templates)?;
    Ok(templates)
}

/// Check every template, reporting the first bad row (1-based)
pub fn validate_templates(templates: &[LineItemTemplate]) -> AdvisorResult<()> {
    if templates.is_empty() {
        return Err(AdvisorError::Import("Catalog contains no items".into()));
    }

    for (idx, template) in templates.iter().enumerate() {
        template
            .validate()
            .map_err(|e| AdvisorError::import_row(idx + 1, e))?;
    }

    Ok(())
}

/// Column positions found in a CSV header
#[derive(Debug, Clone, Default)]
struct CsvColumns {
    description: Option<usize>,
    quantity: Option<usize>,
    kind: Option<usize>,
    price: Option<usize>,
    frequency: Option<usize>,
    priority: Option<usize>,
    flexibility: Option<usize>,
    category: Option<usize>,
}

impl CsvColumns {
    fn from_headers(headers: &StringRecord) -> AdvisorResult<Self> {
        let mut columns = Self::default();

        for (idx, header) in headers.iter().enumerate() {
            let h = header.trim().to_lowercase();
            match h.as_str() {
                "description" | "item" | "name" => columns.description = Some(idx),
                "quantity" | "qty" => columns.quantity = Some(idx),
                "kind" | "type" => columns.kind = Some(idx),
                "price" | "amount" => columns.price = Some(idx),
                "frequency" => columns.frequency = Some(idx),
                "priority" => columns.priority = Some(idx),
                "flexibility" => columns.flexibility = Some(idx),
                "category" => columns.category = Some(idx),
                _ => {}
            }
        }

        let missing: Vec<&str> = [
            ("description", columns.description),
            ("kind", columns.kind),
            ("price", columns.price),
            ("priority", columns.priority),
        ]
        .iter()
        .filter(|(_, col)| col.is_none())
        .map(|(name, _)| *name)
        .collect();

        if !missing.is_empty() {
            return Err(AdvisorError::Import(format!(
                "CSV catalog is missing required columns: {}",
                missing.join(", ")
            )));
        }

        Ok(columns)
    }
}

fn parse_csv(contents: &str) -> AdvisorResult<Vec<LineItemTemplate>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(contents.as_bytes());

    let columns = CsvColumns::from_headers(reader.headers()?)?;

    let mut templates = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        let template =
            parse_record(&record, &columns).map_err(|e| AdvisorError::import_row(idx + 1, e))?;
        templates.push(template);
    }

    Ok(templates)
}

fn field(record: &StringRecord, col: Option<usize>) -> &str {
    col.and_then(|c| record.get(c)).unwrap_or("")
}

fn parse_record(record: &StringRecord, columns: &CsvColumns) -> Result<LineItemTemplate, String> {
    let kind: ItemKind = field(record, columns.kind).parse().map_err(|e| format!("{}", e))?;
    let price = Price::parse(field(record, columns.price))?;
    let frequency: Frequency = field(record, columns.frequency).parse()?;
    let priority: Priority = field(record, columns.priority)
        .parse()
        .map_err(|e| format!("{}", e))?;
    let flexibility = match field(record, columns.flexibility) {
        "" => Flexibility::default(),
        value => value.parse().map_err(|e| format!("{}", e))?,
    };

    Ok(LineItemTemplate {
        description: field(record, columns.description).to_string(),
        quantity: field(record, columns.quantity).to_string(),
        kind,
        price,
        frequency,
        priority,
        flexibility,
        category: field(record, columns.category).to_string(),
    })
}
