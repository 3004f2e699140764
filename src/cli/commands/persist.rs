use crate::storage::append_snapshot_with;

use super::{output, CommandResult, ShellContext};

pub fn save_to_file(context: &mut ShellContext) -> CommandResult {
    let saved = append_snapshot_with(
        &context.record,
        &context.snapshot_path,
        context.snapshot_format,
    );
    if saved {
        output::success("Data saved successfully.");
    }
    Ok(())
}
