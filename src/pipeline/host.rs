use crate::actions::binder::BoundAction;
use crate::actions::handler::HandlerContext;
use crate::foundation::ids::NodeIdx;
use crate::props::transform::PropertyMap;
use crate::spec::model::ComponentSpec;
use serde_json::Value;
use std::collections::BTreeMap;

/// Identity of a node's parent, for hosts that need upward context.
#[derive(Debug, Clone, Copy)]
pub struct ParentInfo<'a> {
    /// Parent node id in the pass's tree.
    pub idx: NodeIdx,
    /// Parent type name as written.
    pub type_name: &'a str,
    /// Parent `id`, if any.
    pub id: Option<&'a str>,
}

/// A fully prepared node handed to [`RenderingHost::instantiate`].
///
/// Children have already been instantiated, in document order.
#[derive(Debug)]
pub struct HostNode<'a, I, O> {
    /// Registry entry the type resolved to.
    pub implementation: &'a I,
    /// Registry key that matched (the PascalCase form when the fallback was used).
    pub type_name: &'a str,
    /// Normalized, unbound properties.
    pub props: PropertyMap,
    /// Bound callbacks under their final property keys.
    pub actions: BTreeMap<String, BoundAction>,
    /// Already-instantiated children.
    pub children: Vec<O>,
    /// Leaf text, if the spec's children were a string.
    pub text: Option<&'a str>,
    /// The originating spec.
    pub spec: &'a ComponentSpec,
    /// Stable key among siblings.
    pub key: String,
    /// Parent identity; `None` for the root.
    pub parent: Option<ParentInfo<'a>>,
    /// Location in the document.
    pub path: String,
    /// Handler context in effect for this node, including scoped ambient data.
    pub context: &'a HandlerContext,
}

/// A node whose type did not resolve, handed to [`RenderingHost::placeholder`].
///
/// Its descendants are not processed.
#[derive(Debug, Clone)]
pub struct PlaceholderNode<'a> {
    /// Unresolved type name as written.
    pub type_name: &'a str,
    /// The originating spec.
    pub spec: &'a ComponentSpec,
    /// Stable key among siblings.
    pub key: String,
    /// Location in the document.
    pub path: String,
    /// Whether the pipeline runs in development mode.
    pub development: bool,
}

/// Turns prepared nodes into concrete output. `I` is the registry's implementation type.
pub trait RenderingHost<I> {
    /// What one instantiated node becomes.
    type Output;

    /// Instantiate a resolved node from its prepared parts and its children's output.
    fn instantiate(&mut self, node: HostNode<'_, I, Self::Output>) -> Self::Output;

    /// Stand-in for a node whose type did not resolve.
    fn placeholder(&mut self, node: PlaceholderNode<'_>) -> Self::Output;
}

/// A host-agnostic rendering of one node.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedNode {
    /// Registry key, or the unresolved type name for placeholders.
    pub component: String,
    /// Stable key among siblings.
    pub key: String,
    /// Normalized properties.
    #[serde(default, skip_serializing_if = "PropertyMap::is_empty")]
    pub props: PropertyMap,
    /// Bound actions: handler name, or an object mirroring a nested action object.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub actions: BTreeMap<String, Value>,
    /// Leaf text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Rendered children in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderedNode>,
    /// Set for unresolved types.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub placeholder: bool,
}

impl RenderedNode {
    /// Nodes in this subtree, depth-first pre-order.
    pub fn walk(&self) -> Vec<&RenderedNode> {
        let mut out = vec![self];
        for c in &self.children {
            out.extend(c.walk());
        }
        out
    }
}

/// Host producing a serializable [`RenderedNode`] tree, for inspection and snapshots.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeDumpHost;

impl<I> RenderingHost<I> for TreeDumpHost {
    type Output = RenderedNode;

    fn instantiate(&mut self, node: HostNode<'_, I, RenderedNode>) -> RenderedNode {
        let actions = node
            .actions
            .into_iter()
            .map(|(k, a)| (k, describe_action(a)))
            .collect();
        RenderedNode {
            component: node.type_name.to_owned(),
            key: node.key,
            props: node.props,
            actions,
            text: node.text.map(str::to_owned),
            children: node.children,
            placeholder: false,
        }
    }

    fn placeholder(&mut self, node: PlaceholderNode<'_>) -> RenderedNode {
        RenderedNode {
            component: node.type_name.to_owned(),
            key: node.key,
            props: PropertyMap::new(),
            actions: BTreeMap::new(),
            text: node
                .development
                .then(|| format!("Unknown component: {}", node.type_name)),
            children: Vec::new(),
            placeholder: true,
        }
    }
}

fn describe_action(action: BoundAction) -> Value {
    match action {
        BoundAction::Handler(h) => Value::String(h.name().to_owned()),
        BoundAction::Object {
            mut props,
            handlers,
        } => {
            for (k, h) in handlers {
                props.insert(k, Value::String(h.name().to_owned()));
            }
            Value::Object(props)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/host.rs"]
mod tests;
