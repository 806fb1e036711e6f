use crate::command::{Command, CommandResult, Output};
use crate::context::TerminalContext;

/// echo [text]
/// Arguments come back rejoined with single spaces; runs of whitespace in
/// the input are not preserved.
pub struct EchoCommand;

impl Command for EchoCommand {
    fn execute(&self, args: &[String], _ctx: &mut TerminalContext) -> CommandResult {
        Ok(Output::text(args.join(" ")))
    }
}
