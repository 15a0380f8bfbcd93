//! CSV Export functionality
//!
//! Exports line items with their original and adjusted amounts.

use crate::error::{AdvisorError, AdvisorResult};
use crate::models::{Catalog, Money};
use std::io::Write;

/// Export every line item of a working catalog to CSV
pub fn export_items_csv<W: Write>(catalog: &Catalog, writer: &mut W) -> AdvisorResult<()> {
    let mut wtr = csv_writer(writer);
    wtr.write_record([
        "Description",
        "Quantity",
        "Type",
        "Category",
        "Priority",
        "Flexibility",
        "Original",
        "Adjusted",
    ])
    .map_err(export_error)?;

    for item in catalog {
        wtr.write_record([
            item.description().to_string(),
            item.quantity().to_string(),
            item.kind().to_string(),
            item.category().to_string(),
            item.priority().to_string(),
            item.flexibility().to_string(),
            amount_field(item.original_amount()),
            amount_field(item.amount()),
        ])
        .map_err(export_error)?;
    }

    finish(wtr)
}

/// CSV writer shared by the exports and reports
pub(crate) fn csv_writer<W: Write>(writer: W) -> ::csv::Writer<W> {
    ::csv::WriterBuilder::new().from_writer(writer)
}

pub(crate) fn export_error(err: ::csv::Error) -> AdvisorError {
    AdvisorError::Export(err.to_string())
}

/// Amount in units with two decimals, e.g. `13500.00`
pub(crate) fn amount_field(amount: Money) -> String {
    format!("{:.2}", amount.as_units_f64())
}

/// Flush buffered records into the underlying writer
pub(crate) fn finish<W: Write>(mut wtr: ::csv::Writer<W>) -> AdvisorResult<()> {
    wtr.flush()
        .map_err(|e| AdvisorError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Flexibility, LineItem, Money, Priority};

    #[test]
    fn test_export_items_csv() {
        let mut catalog = Catalog::new(vec![
            LineItem::grocery(
                "Rice",
                Money::from_units(13_500),
                Priority::Essential,
                Flexibility::Low,
                "Food Staples",
            ),
            LineItem::bill(
                "Gifts, birthdays",
                Money::from_units(50_000),
                Priority::Discretionary,
                Flexibility::High,
                "Gifts",
            ),
        ]);
        catalog.apply_cut_where(|i| i.priority() == Priority::Discretionary, 50.0);

        let mut buf = Vec::new();
        export_items_csv(&catalog, &mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Description,Quantity,Type,Category,Priority,Flexibility,Original,Adjusted"
        );
        assert_eq!(lines[1], "Rice,,Grocery,Food Staples,Essential,Low,13500.00,13500.00");
        assert_eq!(
            lines[2],
            "\"Gifts, birthdays\",,Bill,Gifts,Discretionary,High,50000.00,25000.00"
        );
    }

    #[test]
    fn test_awkward_fields_are_quoted() {
        let catalog = Catalog::new(vec![LineItem::bill(
            "Say \"hi\"\r\nto mum",
            Money::from_units(1_000),
            Priority::Discretionary,
            Flexibility::High,
            "Calls\rSMS",
        )]);

        let mut buf = Vec::new();
        export_items_csv(&catalog, &mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();

        assert!(csv.contains("\"Say \"\"hi\"\"\r\nto mum\",,Bill,\"Calls\rSMS\","));

        let mut reader = ::csv::Reader::from_reader(csv.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[0], "Say \"hi\"\r\nto mum");
        assert_eq!(&record[3], "Calls\rSMS");
    }
}
