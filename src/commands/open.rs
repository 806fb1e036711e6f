use crate::command::{Command, CommandResult, Effect, Output};
use crate::context::TerminalContext;
use crate::path;
use crate::vfs::FsNode;

/// open <file>
/// Hand the file's url to the caller as an [`Effect::OpenUrl`]; the UI is
/// the one that actually opens it.
pub struct OpenCommand;

impl Command for OpenCommand {
    fn execute(&self, args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        let target = args.first().ok_or("Usage: open [filename]")?;
        let resolved = path::join(&ctx.cwd, target);

        match ctx.vfs.resolve(&resolved) {
            Some(FsNode::File { url: Some(url), .. }) => {
                Ok(Output::text(format!("Opening {}...", target))
                    .with_effect(Effect::OpenUrl { url: url.clone() }))
            }
            Some(FsNode::Directory { .. }) => {
                Err(format!("open: {} is a directory. Use 'cd'.", target))
            }
            _ => Err(format!("open: {}: No such file or cannot be opened.", target)),
        }
    }
}
