use crate::command::{Command, CommandResult, Effect, Output};
use crate::context::TerminalContext;
use crate::portfolio::{RESUME_DOWNLOAD_NAME, RESUME_URL};

/// export
/// Asks the caller to download the resume; the download itself is the
/// UI's job.
pub struct ExportCommand;

impl Command for ExportCommand {
    fn execute(&self, _args: &[String], _ctx: &mut TerminalContext) -> CommandResult {
        Ok(
            Output::text("Downloading resume.pdf...").with_effect(Effect::Download {
                url: RESUME_URL.to_string(),
                filename: RESUME_DOWNLOAD_NAME.to_string(),
            }),
        )
    }
}
