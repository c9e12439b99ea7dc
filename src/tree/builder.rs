use crate::foundation::ids::NodeIdx;
use crate::spec::model::{Children, ComponentSpec};

/// One built node. Borrows its originating spec.
#[derive(Debug, Clone)]
pub struct ComponentNode<'s> {
    /// The spec this node was built from.
    pub spec: &'s ComponentSpec,
    /// Non-owning back-reference; `None` for the root.
    pub parent: Option<NodeIdx>,
    /// Child nodes in document order.
    pub children: Vec<NodeIdx>,
    /// Leaf text, when the spec's children were a string.
    pub text: Option<&'s str>,
    /// Index among the parent's children; `None` for the root.
    pub position: Option<usize>,
}

/// What a node holds: exactly one of the four children shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeContent<'a> {
    /// No children, no text.
    Empty,
    /// Leaf text.
    Text(&'a str),
    /// A single child node.
    Single(NodeIdx),
    /// An ordered list of child nodes (possibly of length 0 or 1).
    Many(&'a [NodeIdx]),
}

impl<'s> ComponentNode<'s> {
    /// The node's content, mirroring the shape of its spec's `children`.
    pub fn content(&self) -> NodeContent<'_> {
        match &self.spec.children {
            Children::Absent => NodeContent::Empty,
            Children::Text(_) => self.text.map_or(NodeContent::Empty, NodeContent::Text),
            Children::Single(_) => self
                .children
                .first()
                .copied()
                .map_or(NodeContent::Empty, NodeContent::Single),
            Children::Many(_) => NodeContent::Many(&self.children),
        }
    }

    /// Type name of the originating spec.
    pub fn type_name(&self) -> &'s str {
        &self.spec.type_name
    }
}

/// Arena of [`ComponentNode`]s built from one spec tree.
///
/// Nodes are stored in depth-first pre-order, so the root is always `NodeIdx(0)` and every
/// parent precedes its descendants.
#[derive(Debug, Clone)]
pub struct ComponentTree<'s> {
    nodes: Vec<ComponentNode<'s>>,
}

impl<'s> ComponentTree<'s> {
    /// Build the tree for `spec`. Recursion depth equals the spec's nesting depth.
    pub fn build(spec: &'s ComponentSpec) -> Self {
        let mut tree = Self {
            nodes: Vec::with_capacity(spec.count_nodes()),
        };
        tree.build_node(spec, None, None);
        tree
    }

    fn build_node(
        &mut self,
        spec: &'s ComponentSpec,
        parent: Option<NodeIdx>,
        position: Option<usize>,
    ) -> NodeIdx {
        let idx = NodeIdx(self.nodes.len() as u32);
        let text = match &spec.children {
            Children::Text(text) => Some(text.as_str()),
            _ => None,
        };
        self.nodes.push(ComponentNode {
            spec,
            parent,
            children: Vec::new(),
            text,
            position,
        });

        let children: Vec<NodeIdx> = spec
            .children
            .specs()
            .iter()
            .enumerate()
            .map(|(i, child)| self.build_node(child, Some(idx), Some(i)))
            .collect();
        self.nodes[idx.index()].children = children;
        idx
    }

    /// The root node id.
    pub fn root(&self) -> NodeIdx {
        NodeIdx(0)
    }

    /// The node at `idx`. Panics on an id from another tree.
    pub fn node(&self, idx: NodeIdx) -> &ComponentNode<'s> {
        &self.nodes[idx.index()]
    }

    /// The node at `idx`, if it exists.
    pub fn get(&self, idx: NodeIdx) -> Option<&ComponentNode<'s>> {
        self.nodes.get(idx.index())
    }

    /// Parent of `idx`.
    pub fn parent(&self, idx: NodeIdx) -> Option<NodeIdx> {
        self.node(idx).parent
    }

    /// Children of `idx` in document order.
    pub fn children(&self, idx: NodeIdx) -> &[NodeIdx] {
        &self.node(idx).children
    }

    /// Ancestors of `idx`, nearest first, ending at the root.
    pub fn ancestors(&self, idx: NodeIdx) -> impl Iterator<Item = NodeIdx> + '_ {
        std::iter::successors(self.parent(idx), |&p| self.parent(p))
    }

    /// Distance from the root (the root has depth 0).
    pub fn depth(&self, idx: NodeIdx) -> usize {
        self.ancestors(idx).count()
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes in the subtree rooted at `idx`, `idx` included.
    pub fn subtree_len(&self, idx: NodeIdx) -> usize {
        1 + self
            .children(idx)
            .iter()
            .map(|&c| self.subtree_len(c))
            .sum::<usize>()
    }

    /// All node ids in depth-first pre-order.
    pub fn iter_depth_first(&self) -> impl Iterator<Item = NodeIdx> + '_ {
        (0..self.nodes.len()).map(|i| NodeIdx(i as u32))
    }

    /// Location of `idx` relative to the root spec: `$`, `$.children`, `$.children[2]`, ...
    pub fn path(&self, idx: NodeIdx) -> String {
        self.path_from("$", idx)
    }

    /// [`ComponentTree::path`] with the root rendered as `root` (e.g. `$.root` inside a document).
    pub fn path_from(&self, root: &str, idx: NodeIdx) -> String {
        let mut chain: Vec<NodeIdx> = self.ancestors(idx).collect();
        chain.reverse();
        chain.push(idx);

        let mut s = String::from(root);
        for pair in chain.windows(2) {
            let (parent, child) = (self.node(pair[0]), self.node(pair[1]));
            s.push_str(".children");
            if let (Children::Many(_), Some(i)) = (&parent.spec.children, child.position) {
                s.push('[');
                s.push_str(&i.to_string());
                s.push(']');
            }
        }
        s
    }

    /// Stable key of `idx` among its siblings: its `id`, else `<parentType>-child-<index>`.
    ///
    /// The root falls back to its type name.
    pub fn child_key(&self, idx: NodeIdx) -> String {
        let node = self.node(idx);
        if let Some(id) = &node.spec.id {
            return id.clone();
        }
        match (node.parent, node.position) {
            (Some(p), Some(i)) => format!("{}-child-{i}", self.node(p).spec.type_name),
            _ => node.spec.type_name.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tree/builder.rs"]
mod tests;
