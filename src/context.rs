use crate::path;
use crate::portfolio;
use crate::vfs::VirtualFileSystem;

/// Per-session state around the otherwise stateless interpreter. The tree
/// is read-only; `cwd` is the single mutable field and only a successful
/// `cd` writes it.
pub struct TerminalContext {
    pub vfs: VirtualFileSystem,
    pub cwd: String,
    pub username: String,
    pub hostname: String,
}

impl TerminalContext {
    /// Session over the shipped portfolio tree.
    pub fn new() -> Self {
        Self::with_vfs(portfolio::portfolio())
    }

    /// Session over an arbitrary tree. Tests use this to inject fixtures.
    pub fn with_vfs(vfs: VirtualFileSystem) -> Self {
        Self {
            vfs,
            cwd: path::ROOT.to_string(),
            username: "user".to_string(),
            hostname: "termfolio".to_string(),
        }
    }

    pub fn prompt(&self) -> String {
        format!("{}@{}:{}$", self.username, self.hostname, self.cwd)
    }
}

impl Default for TerminalContext {
    fn default() -> Self {
        Self::new()
    }
}
