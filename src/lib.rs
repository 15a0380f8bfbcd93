//! Budget Advisor - household budgeting calculator
//!
//! This library totals a household's groceries and bills against its monthly
//! income, closes any overspend with a two-phase proportional adjustment,
//! splits the remaining income into risk-tiered savings/investment options and
//! produces rule-based recommendations.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data models (money, line items, catalog, options)
//! - `catalog`: Built-in catalog and catalog file import
//! - `services`: The calculation pipeline
//! - `reports`: Adjustment, breakdown and projection reports
//! - `export`: JSON, YAML and CSV plan export
//! - `display`: Terminal formatting
//! - `config`: Configuration and path management
//! - `cli`: Command handlers for the binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use budget_advisor::catalog::default_catalog;
//! use budget_advisor::models::Money;
//! use budget_advisor::services::{run_plan, PlanInputs};
//!
//! let inputs = PlanInputs::default();
//! let outcome = run_plan(&inputs, &default_catalog(inputs.monthly_income));
//! assert_eq!(outcome.totals.total_fixed_expenses, Money::from_units(2_458_500));
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{AdvisorError, AdvisorResult};
