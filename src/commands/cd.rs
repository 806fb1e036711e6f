use crate::command::{Command, CommandResult, Output};
use crate::context::TerminalContext;
use crate::path;
use crate::vfs::FsNode;

/// cd [directory]
/// The only verb that mutates session state, and only on success.
pub struct CdCommand;

impl Command for CdCommand {
    fn execute(&self, args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        let target = args.first().ok_or("Usage: cd [directory]")?;
        let candidate = path::join(&ctx.cwd, target);

        match ctx.vfs.resolve(&candidate) {
            Some(FsNode::Directory { .. }) => {
                ctx.cwd = candidate;
                Ok(Output::empty()) // a successful cd is silent
            }
            _ => Err(format!("cd: no such file or directory: {}", target)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::VirtualFileSystem;

    fn fixture() -> TerminalContext {
        let vfs = VirtualFileSystem::new(vec![
            FsNode::dir(
                "projects",
                vec![FsNode::dir("demo", vec![]), FsNode::text_file("a.txt", "x")],
            ),
            FsNode::text_file("note.txt", "n"),
        ]);
        TerminalContext::with_vfs(vfs)
    }

    #[test]
    fn cd_absolute_path() {
        let mut ctx = fixture();
        CdCommand
            .execute(&["~/projects".to_string()], &mut ctx)
            .unwrap();
        assert_eq!(ctx.cwd, "~/projects");
    }

    #[test]
    fn cd_relative_path() {
        let mut ctx = fixture();
        ctx.cwd = "~/projects".to_string();
        CdCommand.execute(&["demo".to_string()], &mut ctx).unwrap();
        assert_eq!(ctx.cwd, "~/projects/demo");
    }

    #[test]
    fn cd_dot_is_a_no_op() {
        let mut ctx = fixture();
        ctx.cwd = "~/projects".to_string();
        CdCommand.execute(&[".".to_string()], &mut ctx).unwrap();
        assert_eq!(ctx.cwd, "~/projects");
    }

    #[test]
    fn cd_parent_from_root_stays_at_root() {
        let mut ctx = fixture();
        CdCommand.execute(&["..".to_string()], &mut ctx).unwrap();
        assert_eq!(ctx.cwd, "~");
    }

    #[test]
    fn cd_round_trips_through_parent() {
        let mut ctx = fixture();
        CdCommand
            .execute(&["projects".to_string()], &mut ctx)
            .unwrap();
        assert_eq!(ctx.cwd, "~/projects");
        CdCommand.execute(&["..".to_string()], &mut ctx).unwrap();
        assert_eq!(ctx.cwd, "~");
    }

    #[test]
    fn cd_to_missing_directory_leaves_state_alone() {
        let mut ctx = fixture();
        let err = CdCommand
            .execute(&["nonexistent".to_string()], &mut ctx)
            .unwrap_err();
        assert_eq!(err, "cd: no such file or directory: nonexistent");
        assert_eq!(ctx.cwd, "~");
    }

    #[test]
    fn cd_to_file_fails() {
        let mut ctx = fixture();
        let err = CdCommand
            .execute(&["note.txt".to_string()], &mut ctx)
            .unwrap_err();
        assert!(err.contains("note.txt"));
        assert_eq!(ctx.cwd, "~");
    }

    #[test]
    fn cd_without_argument_is_a_usage_error() {
        let mut ctx = fixture();
        let err = CdCommand.execute(&[], &mut ctx).unwrap_err();
        assert_eq!(err, "Usage: cd [directory]");
    }

    #[test]
    fn cd_slash_and_tilde_go_to_root() {
        let mut ctx = fixture();
        ctx.cwd = "~/projects".to_string();
        CdCommand.execute(&["/".to_string()], &mut ctx).unwrap();
        assert_eq!(ctx.cwd, "~");

        ctx.cwd = "~/projects".to_string();
        CdCommand.execute(&["~".to_string()], &mut ctx).unwrap();
        assert_eq!(ctx.cwd, "~");
    }
}
