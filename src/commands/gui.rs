use crate::command::{Command, CommandResult, Effect, Output};
use crate::context::TerminalContext;

/// gui
/// Asks the caller to switch to the graphical view.
pub struct GuiCommand;

impl Command for GuiCommand {
    fn execute(&self, _args: &[String], _ctx: &mut TerminalContext) -> CommandResult {
        Ok(Output::text("Switching to GUI mode...").with_effect(Effect::EnterGui))
    }
}
