use crate::foundation::error::{SduiError, SduiResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One node of the input tree: a type name plus its properties and children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSpec {
    /// Name used to resolve the renderable implementation.
    #[serde(rename = "type")]
    pub type_name: String,

    /// Optional stable identifier; also used as the child key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Opaque class list forwarded to the host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Opaque inline style object forwarded to the host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Map<String, Value>>,
    /// Passthrough flag asking the implementation to render into its child.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_child: Option<bool>,

    /// Raw, un-normalized properties.
    #[serde(default, alias = "props", skip_serializing_if = "Map::is_empty")]
    pub properties: Map<String, Value>,
    /// Child content; exactly one of the four [`Children`] shapes.
    #[serde(default, skip_serializing_if = "Children::is_absent")]
    pub children: Children,

    /// Accessibility attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a11y: Option<A11ySpec>,
    /// Entries forwarded as `data-<key>` attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
    /// Forwarded as `data-testid`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    /// Declarative event table: event name -> handler reference.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub events: BTreeMap<String, EventSpec>,
    /// Ambient-data overrides applied to this node's subtree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Map<String, Value>>,
}

impl ComponentSpec {
    /// A bare node of the given type with no properties or children.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            id: None,
            class_name: None,
            style: None,
            as_child: None,
            properties: Map::new(),
            children: Children::Absent,
            a11y: None,
            data: None,
            test_id: None,
            events: BTreeMap::new(),
            context: None,
        }
    }

    /// Set the node id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Insert one raw property.
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Replace the children with leaf text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children = Children::Text(text.into());
        self
    }

    /// Replace the children with a single child node.
    pub fn with_child(mut self, child: ComponentSpec) -> Self {
        self.children = Children::Single(Box::new(child));
        self
    }

    /// Replace the children with an ordered list of nodes.
    pub fn with_children(mut self, children: impl IntoIterator<Item = ComponentSpec>) -> Self {
        self.children = Children::Many(children.into_iter().collect());
        self
    }

    /// Number of spec nodes in this subtree. Text leaves are content, not nodes.
    pub fn count_nodes(&self) -> usize {
        1 + self
            .children
            .specs()
            .iter()
            .map(ComponentSpec::count_nodes)
            .sum::<usize>()
    }

    /// Label used in messages: `Type` or `Type#id`.
    pub(crate) fn label(&self) -> String {
        match &self.id {
            Some(id) => format!("{}#{id}", self.type_name),
            None => self.type_name.clone(),
        }
    }
}

/// The four mutually exclusive shapes a node's `children` field can take.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Children {
    /// No children and no text.
    #[default]
    Absent,
    /// Leaf text content.
    Text(String),
    /// Exactly one child node.
    Single(Box<ComponentSpec>),
    /// Ordered child nodes.
    Many(Vec<ComponentSpec>),
}

impl Children {
    /// `true` for [`Children::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Child nodes in document order (empty for absent/text).
    pub fn specs(&self) -> &[ComponentSpec] {
        match self {
            Self::Absent | Self::Text(_) => &[],
            Self::Single(child) => std::slice::from_ref(&**child),
            Self::Many(children) => children,
        }
    }
}

impl<'de> Deserialize<'de> for Children {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Null(()),
            Text(String),
            Many(Vec<ComponentSpec>),
            Single(Box<ComponentSpec>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Null(()) => Ok(Self::Absent),
            Repr::Text(text) => Ok(Self::Text(text)),
            Repr::Many(children) => Ok(Self::Many(children)),
            Repr::Single(child) => Ok(Self::Single(child)),
        }
    }
}

/// Accessibility attributes of a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct A11ySpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_described_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_controls: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_expanded: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_index: Option<i64>,
    /// `true`/`false` or a popup role such as `"menu"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_popup: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_live: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_atomic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// One entry of a node's `events` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSpec {
    /// Handler name looked up in the handler context.
    pub action: String,
    /// Opaque parameters for the host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

/// Document wrapper: version, metadata, one root node, optional theme and state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UISpecification {
    /// Specification format version.
    pub version: String,
    /// Information about the document itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<SpecificationMetadata>,
    /// Root of the component tree.
    pub root: ComponentSpec,
    /// Opaque theme configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Map<String, Value>>,
    /// Initial state definitions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<StateSpec>,
    /// Opaque data source declarations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_sources: Vec<Map<String, Value>>,
}

impl UISpecification {
    /// Wrap a root node into a document with the given version.
    pub fn new(version: impl Into<String>, root: ComponentSpec) -> Self {
        Self {
            version: version.into(),
            metadata: None,
            root,
            theme: None,
            state: None,
            data_sources: Vec::new(),
        }
    }

    /// Strictly parse a document from a JSON reader.
    ///
    /// Any malformed node rejects the whole document; use [`crate::SpecParser`] for
    /// subtree-local error recovery.
    pub fn from_reader<R: std::io::Read>(r: R) -> SduiResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SduiError::serde(format!("parse specification JSON: {e}")))
    }

    /// Strictly parse a document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SduiResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SduiError::validation(format!("open specification '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// The `state.initial` object, if declared.
    pub fn initial_state(&self) -> Option<&Map<String, Value>> {
        self.state.as_ref().and_then(|s| s.initial.as_ref())
    }
}

/// Metadata about a specification document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct SpecificationMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Custom keys not covered above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Global state declarations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateSpec {
    /// Initial state values handed to the host as ambient data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<Map<String, Value>>,
    /// Other state declarations, kept opaque.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Either a full document or a bare root component.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// A `{ version, root, ... }` document.
    Full(UISpecification),
    /// A bare component tree.
    Component(ComponentSpec),
}

impl Document {
    /// Root component of the document.
    pub fn root(&self) -> &ComponentSpec {
        match self {
            Self::Full(doc) => &doc.root,
            Self::Component(spec) => spec,
        }
    }

    /// The wrapped full document, if any.
    pub fn as_full(&self) -> Option<&UISpecification> {
        match self {
            Self::Full(doc) => Some(doc),
            Self::Component(_) => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spec/model.rs"]
mod tests;
