use crate::command::{Command, CommandResult, Effect, Output};
use crate::context::TerminalContext;

/// clear
/// Asks the caller to discard the displayed history; prints nothing itself.
pub struct ClearCommand;

impl Command for ClearCommand {
    fn execute(&self, _args: &[String], _ctx: &mut TerminalContext) -> CommandResult {
        Ok(Output::empty().with_effect(Effect::ClearScreen))
    }
}
