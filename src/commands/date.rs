use crate::command::{Command, CommandResult, Output};
use crate::context::TerminalContext;
use chrono::Local;

/// date
/// Current wall clock, human-readable.
pub struct DateCommand;

impl Command for DateCommand {
    fn execute(&self, _args: &[String], _ctx: &mut TerminalContext) -> CommandResult {
        Ok(Output::text(
            Local::now().format("%a %b %e %Y %H:%M:%S %z").to_string(),
        ))
    }
}
