//! The virtual file tree behind the terminal.
//!
//! The tree is built once at session start and never mutated: every verb
//! only reads it. Paths are root-anchored strings (`~`, `~/projects`, ...);
//! anything relative to the working directory is joined by the caller
//! before it reaches the resolver.

#[derive(Debug, Clone, PartialEq)]
pub enum FsNode {
    File {
        name: String,
        /// text body, for files `cat` can display
        content: Option<String>,
        /// locator for downloadable resources (PDFs etc.)
        url: Option<String>,
        mime_type: Option<String>,
    },
    Directory {
        name: String,
        /// insertion order is display order
        children: Vec<FsNode>,
    },
}

impl FsNode {
    pub fn text_file(name: &str, content: &str) -> Self {
        FsNode::File {
            name: name.to_string(),
            content: Some(content.to_string()),
            url: None,
            mime_type: None,
        }
    }

    pub fn resource(name: &str, url: &str, mime_type: &str) -> Self {
        FsNode::File {
            name: name.to_string(),
            content: None,
            url: Some(url.to_string()),
            mime_type: Some(mime_type.to_string()),
        }
    }

    pub fn dir(name: &str, children: Vec<FsNode>) -> Self {
        FsNode::Directory {
            name: name.to_string(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FsNode::File { name, .. } | FsNode::Directory { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, FsNode::Directory { .. })
    }
}

#[derive(Debug, Clone)]
pub struct VirtualFileSystem {
    root: FsNode,
}

impl VirtualFileSystem {
    /// Build a tree from the root directory's children. The root itself is
    /// always a directory named `~`.
    pub fn new(children: Vec<FsNode>) -> Self {
        Self {
            root: FsNode::dir("~", children),
        }
    }

    pub fn root(&self) -> &FsNode {
        &self.root
    }

    /// Walk a root-anchored path to its node. `~`, `/` and the empty string
    /// all name the root. Sibling lookup is exact and case-sensitive, first
    /// match wins. Descending into a file fails the whole resolution; there
    /// are no partial results.
    pub fn resolve(&self, path: &str) -> Option<&FsNode> {
        if path.is_empty() || path == "/" || path == "~" {
            return Some(&self.root);
        }
        let trimmed = path
            .strip_prefix("~/")
            .or_else(|| path.strip_prefix("./"))
            .or_else(|| path.strip_prefix('/'))
            .unwrap_or(path);

        let mut node = &self.root;
        for segment in trimmed.split('/').filter(|s| !s.is_empty()) {
            match node {
                FsNode::Directory { children, .. } => {
                    node = children.iter().find(|c| c.name() == segment)?;
                }
                FsNode::File { .. } => return None,
            }
        }
        Some(node)
    }
}
