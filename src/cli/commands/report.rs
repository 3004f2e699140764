use crate::report::generate_summary;

use super::{output, CommandResult, ShellContext};

pub fn view_summary(context: &mut ShellContext) -> CommandResult {
    output::section("Financial Summary");
    output::info(generate_summary(&context.record));
    if context.record.is_over_budget() {
        output::warning("Warning: You are over budget!");
    }
    Ok(())
}
