//! CLI command for listing the catalog

use clap::Args;

use crate::display::format_catalog_table;
use crate::error::AdvisorResult;
use crate::models::ItemKind;

use super::PlanSession;

/// Catalog listing options
#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    /// Only show one kind: grocery or bill
    #[arg(short, long)]
    pub kind: Option<ItemKind>,

    /// Show amounts after cuts and automatic adjustment
    #[arg(short, long)]
    pub adjusted: bool,
}

/// Print the catalog as a table
pub fn handle_catalog_command(session: &PlanSession, args: &CatalogArgs) -> AdvisorResult<()> {
    let catalog = if args.adjusted {
        &session.outcome.adjusted_catalog
    } else {
        &session.catalog
    };

    print!("{}", format_catalog_table(catalog, args.kind));
    Ok(())
}
