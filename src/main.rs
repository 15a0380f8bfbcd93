use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use budget_advisor::cli::{
    handle_catalog_command, handle_config_command, handle_export_command, handle_plan_command,
    handle_report_command, CatalogArgs, ConfigCommands, ExportArgs, PlanArgs, PlanSession,
    ReportCommands,
};
use budget_advisor::config::{AdvisorPaths, Settings};

#[derive(Parser)]
#[command(
    name = "budget-advisor",
    author = "Kaylee Beyene",
    version,
    about = "Household budgeting calculator with automatic spending adjustment",
    long_about = "Budget Advisor totals your groceries and bills against your income, \
                  trims discretionary and flexible spending when you overspend, and \
                  suggests how to split what is left between savings, investments \
                  and discretionary spending."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    plan: PlanArgs,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the budget overview, adjustments, options and recommendations (default)
    Plan,

    /// List catalog line items
    Catalog(CatalogArgs),

    /// Adjustment, breakdown and projection reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export the plan to JSON, YAML or CSV
    Export(ExportArgs),

    /// Show or change saved settings
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let paths = AdvisorPaths::new()?;

    match cli.command.unwrap_or(Commands::Plan) {
        // config commands load settings themselves; init must work on a corrupt file
        Commands::Config(cmd) => handle_config_command(&paths, cmd)?,
        command => {
            let settings = Settings::load_or_create(&paths)?;
            let session = PlanSession::build(&cli.plan, settings)?;
            run_plan_command(&session, command)?;
        }
    }

    Ok(())
}

fn run_plan_command(session: &PlanSession, command: Commands) -> Result<()> {
    match command {
        Commands::Plan => handle_plan_command(session)?,
        Commands::Catalog(args) => handle_catalog_command(session, &args)?,
        Commands::Report(cmd) => handle_report_command(session, cmd)?,
        Commands::Export(args) => handle_export_command(session, args)?,
        Commands::Config(_) => {}
    }
    Ok(())
}
