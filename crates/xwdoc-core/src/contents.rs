//! Table-of-contents tree built from document headings.
//!
//! Nodes live in an arena ([`ContentsTree`]) and refer to each other by
//! [`NodeId`]; parents never own children through references. One subtree is
//! built per document, then the document roots are attached in the configured
//! contents order.
//!
//! ## Nesting
//!
//! [`ContentsBuilder`] tracks the chain of open ancestors and their heading
//! levels. A heading closes every open ancestor whose level is the same or
//! deeper, then attaches to what remains (or to the document root). A heading
//! deeper than the current one nests under it no matter how many levels it
//! skips, and a jump back up by several levels unwinds all of them:
//!
//! ```text
//! ## A          A
//! #### B        ├─ B
//! ### C         ├─ C
//! # D           D
//! ```
//!
//! ```rust
//! use xwdoc_core::{ContentsTree, Heading};
//!
//! let headings = vec![
//!     Heading { level: 2, text: "Menus".into(), id: "menus".into() },
//!     Heading { level: 3, text: "File".into(), id: "file".into() },
//! ];
//! let mut tree = ContentsTree::new();
//! let root = tree.add_document("Window", "window.html", &headings);
//!
//! let menus = tree.children(root)[0];
//! assert_eq!(tree.node(menus).link, "window.html#menus");
//! assert_eq!(tree.node(tree.children(menus)[0]).name, "File");
//! ```

use serde::Serialize;

use crate::heading::{Heading, escape_name};

/// Stable index of a node inside a [`ContentsTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One entry of the contents tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentsNode {
    /// Display name, already HTML-escaped.
    pub name: String,
    /// Target: `<page>` for document roots, `<page>#<id>` for headings.
    pub link: String,
    /// Parent node, `None` for document roots.
    pub parent: Option<NodeId>,
    /// Children in heading order.
    pub children: Vec<NodeId>,
}

/// Arena holding every contents node plus the ordered list of roots.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContentsTree {
    nodes: Vec<ContentsNode>,
    roots: Vec<NodeId>,
}

impl ContentsTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a detached node and return its id.
    pub fn push(&mut self, name: String, link: String, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(ContentsNode {
            name,
            link,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        id
    }

    /// Build the subtree for one document and return its (unattached) root.
    ///
    /// The root is named after the page title (escaped) and links to the page;
    /// each heading becomes a node linking to `<page>#<id>`.
    pub fn add_document(&mut self, title: &str, page: &str, headings: &[Heading]) -> NodeId {
        let root = self.push(escape_name(title), page.to_string(), None);
        let mut builder = ContentsBuilder::new(root);
        for heading in headings {
            builder.push(self, page, heading);
        }
        root
    }

    /// Append `root` to the ordered list of top-level entries.
    pub fn attach_root(&mut self, root: NodeId) {
        if !self.roots.contains(&root) {
            self.roots.push(root);
        }
    }

    /// Top-level entries in display order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Access a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this tree.
    pub fn node(&self, id: NodeId) -> &ContentsNode {
        &self.nodes[id.0]
    }

    /// Children of `id` in order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Number of nodes in the arena, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth-first, pre-order walk of the subtree rooted at `id`.
    ///
    /// Yields `(depth, node)` pairs with the starting node at depth 0.
    pub fn walk(&self, id: NodeId) -> Vec<(usize, NodeId)> {
        let mut out = Vec::new();
        let mut stack = vec![(0, id)];
        while let Some((depth, current)) = stack.pop() {
            out.push((depth, current));
            for child in self.children(current).iter().rev() {
                stack.push((depth + 1, *child));
            }
        }
        out
    }

    /// Depth-first walk over every attached root in order.
    pub fn walk_all(&self) -> Vec<(usize, NodeId)> {
        self.roots.iter().flat_map(|root| self.walk(*root)).collect()
    }

    /// Id of the top-level ancestor of `id` (itself when it is a root).
    pub fn top_ancestor(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(parent) = self.nodes[current.0].parent {
            current = parent;
        }
        current
    }
}

/// Incremental heading-to-tree builder for one document.
///
/// Holds the chain of open ancestors as `(level, node)` pairs; the document
/// root sits below the chain and is never closed.
#[derive(Debug)]
pub struct ContentsBuilder {
    root: NodeId,
    open: Vec<(u8, NodeId)>,
}

impl ContentsBuilder {
    /// Start building under the given document root.
    pub const fn new(root: NodeId) -> Self {
        Self {
            root,
            open: Vec::new(),
        }
    }

    /// Append one heading and return its node.
    pub fn push(&mut self, tree: &mut ContentsTree, page: &str, heading: &Heading) -> NodeId {
        while self
            .open
            .last()
            .is_some_and(|(level, _)| *level >= heading.level)
        {
            self.open.pop();
        }

        let parent = self.open.last().map_or(self.root, |(_, node)| *node);
        let node = tree.push(
            escape_name(&heading.text),
            format!("{page}#{}", heading.id),
            Some(parent),
        );
        self.open.push((heading.level, node));
        node
    }
}
