use crate::command::{Command, CommandResult, Output};
use crate::context::TerminalContext;

/// whoami
pub struct WhoamiCommand;

impl Command for WhoamiCommand {
    fn execute(&self, _args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        Ok(Output::text(ctx.username.clone()))
    }
}
