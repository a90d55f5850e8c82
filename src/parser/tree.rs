//! The per-unit entity tree produced by the scanner.
//!
//! Nodes live in a flat arena and refer to each other by [`NodeId`]; every
//! node has exactly one parent (another node, or the unit root when `parent`
//! is `None`). The tree is transient: registration consumes it.

use std::sync::Arc;

use smol_str::SmolStr;

use super::kinds::EntityKind;
use crate::base::LineRange;

/// Index of a node in its [`ScanTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One matched entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanNode {
    pub kind: EntityKind,
    pub name: SmolStr,
    pub owner: Option<SmolStr>,
    /// Key of the grammar rule that matched.
    pub rule: SmolStr,
    pub range: LineRange,
    pub parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl ScanNode {
    pub fn new(kind: EntityKind, name: impl Into<SmolStr>, rule: impl Into<SmolStr>, line: u32) -> Self {
        Self {
            kind,
            name: name.into(),
            owner: None,
            rule: rule.into(),
            range: LineRange::new(line, 0),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_owner(mut self, owner: Option<SmolStr>) -> Self {
        self.owner = owner;
        self
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanTree {
    path: Arc<str>,
    line_count: u32,
    nodes: Vec<ScanNode>,
    roots: Vec<NodeId>,
}

impl ScanTree {
    pub fn new(path: impl Into<Arc<str>>, line_count: u32) -> Self {
        Self {
            path: path.into(),
            line_count,
            nodes: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Unit path; also the qualified name of the unit root.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn shared_path(&self) -> Arc<str> {
        self.path.clone()
    }

    pub fn line_count(&self) -> u32 {
        self.line_count
    }

    /// Append `node` under `parent` (the unit root when `None`).
    pub fn push(&mut self, parent: Option<NodeId>, mut node: ScanNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        node.parent = parent;
        match parent {
            Some(parent) => self.nodes[parent.index()].children.push(id),
            None => self.roots.push(id),
        }
        self.nodes.push(node);
        id
    }

    /// Close a node's range. The end never precedes the start.
    pub(crate) fn close(&mut self, id: NodeId, end_line: u32) {
        let range = &mut self.nodes[id.index()].range;
        range.end = end_line.max(range.start);
    }

    pub fn node(&self, id: NodeId) -> &ScanNode {
        &self.nodes[id.index()]
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in scan (line) order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &ScanNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (NodeId(idx as u32), node))
    }

    /// Names from the unit root down to `id`, joined with `.`.
    pub fn path_of(&self, id: NodeId) -> String {
        let mut names = vec![self.node(id).name.as_str()];
        let mut current = self.node(id).parent;
        while let Some(parent) = current {
            names.push(self.node(parent).name.as_str());
            current = self.node(parent).parent;
        }
        names.reverse();
        names.join(".")
    }

    /// First node with the given name, in scan order.
    pub fn find(&self, name: &str) -> Option<&ScanNode> {
        self.find_id(name).map(|id| self.node(id))
    }

    pub fn find_id(&self, name: &str) -> Option<NodeId> {
        self.iter().find(|(_, node)| node.name == name).map(|(id, _)| id)
    }
}
