use crate::command::{Command, CommandResult, ListingEntry, Output};
use crate::context::TerminalContext;
use crate::path;
use crate::vfs::FsNode;

/// ls [path]
/// List directory contents, directories suffixed with `/`, in the order
/// the tree declares them.
pub struct LsCommand;

impl Command for LsCommand {
    fn execute(&self, args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        let target = args.first().map(String::as_str).unwrap_or(".");
        let resolved = path::join(&ctx.cwd, target);

        let node = ctx.vfs.resolve(&resolved).ok_or_else(|| {
            format!("ls: cannot access '{}': No such file or directory", target)
        })?;

        match node {
            FsNode::Directory { children, .. } => {
                if children.is_empty() {
                    Ok(Output::text("Directory is empty."))
                } else {
                    Ok(Output::listing(
                        children
                            .iter()
                            .map(|child| ListingEntry {
                                name: child.name().to_string(),
                                is_dir: child.is_dir(),
                            })
                            .collect(),
                    ))
                }
            }
            FsNode::File { name, .. } => Ok(Output::text(name.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::VirtualFileSystem;

    fn fixture() -> TerminalContext {
        let vfs = VirtualFileSystem::new(vec![
            FsNode::text_file("zeta.txt", "z"),
            FsNode::dir("projects", vec![FsNode::text_file("a.txt", "alpha")]),
            FsNode::dir("empty", vec![]),
            FsNode::text_file("alpha.txt", "a"),
        ]);
        TerminalContext::with_vfs(vfs)
    }

    #[test]
    fn lists_in_declaration_order_with_dir_suffix() {
        let mut ctx = fixture();
        let out = LsCommand.execute(&[], &mut ctx).unwrap();
        assert_eq!(out.text, "zeta.txt\nprojects/\nempty/\nalpha.txt");
    }

    #[test]
    fn listing_is_structured_for_the_ui() {
        let mut ctx = fixture();
        let out = LsCommand.execute(&[], &mut ctx).unwrap();
        let listing = out.listing.unwrap();
        assert_eq!(listing.len(), 4);
        assert!(listing[1].is_dir);
        assert!(!listing[0].is_dir);
    }

    #[test]
    fn empty_directory_says_so() {
        let mut ctx = fixture();
        let out = LsCommand.execute(&["empty".to_string()], &mut ctx).unwrap();
        assert_eq!(out.text, "Directory is empty.");
        assert!(out.listing.is_none());
    }

    #[test]
    fn file_target_prints_its_name() {
        let mut ctx = fixture();
        let out = LsCommand
            .execute(&["projects/a.txt".to_string()], &mut ctx)
            .unwrap();
        assert_eq!(out.text, "a.txt");
    }

    #[test]
    fn missing_target_reports_the_argument() {
        let mut ctx = fixture();
        let err = LsCommand
            .execute(&["nope".to_string()], &mut ctx)
            .unwrap_err();
        assert_eq!(err, "ls: cannot access 'nope': No such file or directory");
    }

    #[test]
    fn lists_inside_the_working_directory() {
        let mut ctx = fixture();
        ctx.cwd = "~/projects".to_string();
        let out = LsCommand.execute(&[], &mut ctx).unwrap();
        assert_eq!(out.text, "a.txt");
    }
}
