//! CLI command for the plan view

use crate::display::format_plan;
use crate::error::AdvisorResult;

use super::PlanSession;

/// Print the plan overview, adjustments, options and recommendations
pub fn handle_plan_command(session: &PlanSession) -> AdvisorResult<()> {
    print!("{}", format_plan(&session.inputs, &session.outcome));
    Ok(())
}
