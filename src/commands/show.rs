use crate::command::{Command, CommandResult, Output};
use crate::context::TerminalContext;
use crate::vfs::FsNode;

/// One handler behind all the content shortcuts (`about_me`, `skills`,
/// ...): each registration points at a different root file.
pub struct ShowCommand {
    file: &'static str,
}

impl ShowCommand {
    pub fn new(file: &'static str) -> Self {
        Self { file }
    }
}

impl Command for ShowCommand {
    fn execute(&self, _args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        match ctx.vfs.resolve(&format!("~/{}", self.file)) {
            Some(FsNode::File {
                content: Some(text),
                ..
            }) if !text.is_empty() => Ok(Output::text(text.clone())),
            Some(FsNode::File { .. }) => Err(format!(
                "Error: {} is not a text file or is empty.",
                self.file
            )),
            _ => Err(format!("Error: File '{}' not found.", self.file)),
        }
    }
}
