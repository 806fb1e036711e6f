use crate::command::{Command, CommandResult, Output};
use crate::context::TerminalContext;
use crate::path;
use crate::vfs::FsNode;

/// cat <file>
/// Print a file's text content verbatim. Url-only files point the user at
/// `open` instead.
pub struct CatCommand;

impl Command for CatCommand {
    fn execute(&self, args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        let target = args.first().ok_or("Usage: cat [filename]")?;
        let resolved = path::join(&ctx.cwd, target);

        match ctx.vfs.resolve(&resolved) {
            Some(FsNode::File {
                content: Some(text),
                ..
            }) if !text.is_empty() => Ok(Output::text(text.clone())),
            Some(FsNode::File { .. }) => Err(format!(
                "cat: {} is not a text file or is empty. Try 'open {}'.",
                target, target
            )),
            Some(FsNode::Directory { .. }) => Err(format!("cat: {}: Is a directory", target)),
            None => Err(format!("cat: {}: No such file or directory", target)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::VirtualFileSystem;

    fn fixture() -> TerminalContext {
        let vfs = VirtualFileSystem::new(vec![
            FsNode::text_file("note.txt", "line one\nline two"),
            FsNode::resource("resume.pdf", "/resume.pdf", "application/pdf"),
            FsNode::dir("projects", vec![FsNode::text_file("a.txt", "hello")]),
        ]);
        TerminalContext::with_vfs(vfs)
    }

    #[test]
    fn prints_content_verbatim() {
        let mut ctx = fixture();
        let out = CatCommand
            .execute(&["note.txt".to_string()], &mut ctx)
            .unwrap();
        assert_eq!(out.text, "line one\nline two");
    }

    #[test]
    fn resolves_relative_to_cwd() {
        let mut ctx = fixture();
        ctx.cwd = "~/projects".to_string();
        let out = CatCommand
            .execute(&["a.txt".to_string()], &mut ctx)
            .unwrap();
        assert_eq!(out.text, "hello");
    }

    #[test]
    fn url_only_file_suggests_open() {
        let mut ctx = fixture();
        let err = CatCommand
            .execute(&["resume.pdf".to_string()], &mut ctx)
            .unwrap_err();
        assert_eq!(
            err,
            "cat: resume.pdf is not a text file or is empty. Try 'open resume.pdf'."
        );
    }

    #[test]
    fn directory_is_rejected() {
        let mut ctx = fixture();
        let err = CatCommand
            .execute(&["projects".to_string()], &mut ctx)
            .unwrap_err();
        assert_eq!(err, "cat: projects: Is a directory");
    }

    #[test]
    fn missing_file_is_reported() {
        let mut ctx = fixture();
        let err = CatCommand
            .execute(&["missing.txt".to_string()], &mut ctx)
            .unwrap_err();
        assert_eq!(err, "cat: missing.txt: No such file or directory");
    }

    #[test]
    fn no_argument_is_a_usage_error() {
        let mut ctx = fixture();
        let err = CatCommand.execute(&[], &mut ctx).unwrap_err();
        assert_eq!(err, "Usage: cat [filename]");
    }
}
