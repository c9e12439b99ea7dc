use crate::foundation::error::{SduiError, SduiResult};
use crate::spec::model::{
    Children, ComponentSpec, Document, SpecificationMetadata, StateSpec, UISpecification,
};
use serde_json::{Map, Value};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One segment of a location inside a specification document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecPathElem {
    /// Object field.
    Field(String),
    /// Array element.
    Index(usize),
}

impl SpecPathElem {
    fn field(name: &str) -> Self {
        Self::Field(name.to_owned())
    }
}

/// A structural problem found while parsing, located by path.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecError {
    /// Location of the offending value, from the document root.
    pub path: Vec<SpecPathElem>,
    /// Human readable description.
    pub message: String,
}

impl SpecError {
    fn at(path: &[SpecPathElem], message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            message: message.into(),
        }
    }

    /// The path rendered as `$.root.children[1]`.
    pub fn path_string(&self) -> String {
        format_path(&self.path)
    }
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return write!(f, "{}", self.message);
        }
        write!(f, "{}: {}", format_path(&self.path), self.message)
    }
}

pub(crate) fn format_path(path: &[SpecPathElem]) -> String {
    let mut s = String::from("$");
    for p in path {
        match p {
            SpecPathElem::Field(name) => {
                s.push('.');
                s.push_str(name);
            }
            SpecPathElem::Index(i) => {
                s.push('[');
                s.push_str(&i.to_string());
                s.push(']');
            }
        }
    }
    s
}

/// A non-empty list of [`SpecError`]s.
#[derive(Debug, Clone)]
pub struct SpecErrors {
    /// Errors in document order.
    pub errors: Vec<SpecError>,
}

impl fmt::Display for SpecErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SpecErrors {}

/// Result of a lenient parse: the surviving document plus what was pruned from it.
#[derive(Debug, Clone)]
pub struct ParseReport {
    /// The document with every malformed subtree removed.
    pub document: Document,
    /// One error per pruned subtree or rejected optional field.
    pub errors: Vec<SpecError>,
}

impl ParseReport {
    /// `true` when nothing was pruned.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Reject the document if anything was pruned.
    pub fn into_strict(self) -> SduiResult<Document> {
        if self.errors.is_empty() {
            return Ok(self.document);
        }
        let errors = SpecErrors {
            errors: self.errors,
        };
        Err(SduiError::validation(format!(
            "specification is malformed:\n{errors}"
        )))
    }
}

/// Parses JSON into a [`Document`], containing structural errors to the subtree they occur in.
///
/// A node whose own fields are malformed, or whose `children` value is none of absent, string,
/// node, or array of nodes, is dropped from its parent and reported. Siblings and ancestors are
/// kept. Only a malformed document envelope or root node fails the whole parse.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecParser;

impl SpecParser {
    /// Create a parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse a JSON string.
    pub fn parse_str(&self, input: &str) -> SduiResult<ParseReport> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| SduiError::serde(format!("invalid JSON: {e}")))?;
        self.parse_value(&value)
    }

    /// Parse JSON from a reader.
    pub fn parse_reader<R: std::io::Read>(&self, r: R) -> SduiResult<ParseReport> {
        let value: Value = serde_json::from_reader(r)
            .map_err(|e| SduiError::serde(format!("invalid JSON: {e}")))?;
        self.parse_value(&value)
    }

    /// Parse a JSON file on disk.
    pub fn parse_path(&self, path: impl AsRef<Path>) -> SduiResult<ParseReport> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SduiError::validation(format!("open specification '{}': {e}", path.display()))
        })?;
        self.parse_reader(BufReader::new(f))
    }

    /// Parse an already-decoded JSON value.
    #[tracing::instrument(skip(self, value))]
    pub fn parse_value(&self, value: &Value) -> SduiResult<ParseReport> {
        let Value::Object(obj) = value else {
            return Err(SduiError::validation(format!(
                "invalid specification format: expected object, got {}",
                json_kind(value)
            )));
        };

        let mut errors = Vec::new();
        let document = if obj.contains_key("version") && obj.contains_key("root") {
            parse_document(obj, &mut errors).map(Document::Full)
        } else if obj.get("type").is_some_and(Value::is_string) {
            parse_component(value, &mut Vec::new(), &mut errors).map(Document::Component)
        } else {
            return Err(SduiError::validation(
                "invalid specification format: missing required properties",
            ));
        };

        match document {
            Some(document) => Ok(ParseReport { document, errors }),
            None => Err(SduiError::validation(format!(
                "specification is malformed:\n{}",
                SpecErrors { errors }
            ))),
        }
    }
}

fn parse_document(
    obj: &Map<String, Value>,
    errors: &mut Vec<SpecError>,
) -> Option<UISpecification> {
    let version = match obj.get("version") {
        Some(Value::String(v)) => v.clone(),
        _ => {
            errors.push(SpecError::at(
                &[SpecPathElem::field("version")],
                "version must be a string",
            ));
            return None;
        }
    };

    let root_value = obj.get("root")?;
    if !root_value.is_object() {
        errors.push(SpecError::at(
            &[SpecPathElem::field("root")],
            "root must be an object",
        ));
        return None;
    }
    let root = parse_component(root_value, &mut vec![SpecPathElem::field("root")], errors)?;

    let mut doc = UISpecification::new(version, root);
    doc.metadata = optional_field::<SpecificationMetadata>(obj, "metadata", errors);
    doc.theme = optional_field::<Map<String, Value>>(obj, "theme", errors);
    doc.state = optional_field::<StateSpec>(obj, "state", errors);

    match obj.get("dataSources") {
        None | Some(Value::Null) => {}
        Some(Value::Array(items)) if items.iter().all(Value::is_object) => {
            doc.data_sources = items
                .iter()
                .filter_map(|v| v.as_object().cloned())
                .collect();
        }
        Some(_) => errors.push(SpecError::at(
            &[SpecPathElem::field("dataSources")],
            "dataSources must be an array of objects",
        )),
    }

    Some(doc)
}

/// Decode an optional object-valued envelope field, dropping it with an error if malformed.
fn optional_field<T: serde::de::DeserializeOwned>(
    obj: &Map<String, Value>,
    name: &str,
    errors: &mut Vec<SpecError>,
) -> Option<T> {
    let value = obj.get(name)?;
    if value.is_null() {
        return None;
    }
    let path = [SpecPathElem::field(name)];
    if !value.is_object() {
        errors.push(SpecError::at(&path, format!("{name} must be an object")));
        return None;
    }
    match serde_json::from_value(value.clone()) {
        Ok(v) => Some(v),
        Err(e) => {
            errors.push(SpecError::at(&path, format!("invalid {name}: {e}")));
            None
        }
    }
}

/// Parse one node. `None` means the node (and its subtree) was pruned and an error recorded.
fn parse_component(
    value: &Value,
    path: &mut Vec<SpecPathElem>,
    errors: &mut Vec<SpecError>,
) -> Option<ComponentSpec> {
    let Value::Object(obj) = value else {
        errors.push(SpecError::at(
            path,
            format!("expected component object, got {}", json_kind(value)),
        ));
        return None;
    };

    let Some(type_name) = obj.get("type").and_then(Value::as_str) else {
        path.push(SpecPathElem::field("type"));
        errors.push(SpecError::at(path, "invalid component: type must be a string"));
        path.pop();
        return None;
    };

    if !validate_events(obj, path, errors) {
        return None;
    }

    let head: Map<String, Value> = obj
        .iter()
        .filter(|(k, _)| k.as_str() != "children")
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    let mut spec: ComponentSpec = match serde_json::from_value(Value::Object(head)) {
        Ok(spec) => spec,
        Err(e) => {
            errors.push(SpecError::at(
                path,
                format!("invalid component '{type_name}': {e}"),
            ));
            return None;
        }
    };

    if let Some(children) = obj.get("children") {
        path.push(SpecPathElem::field("children"));
        let parsed = parse_children(children, path, errors);
        match parsed {
            Ok(c) => spec.children = c,
            Err(found) => {
                errors.push(SpecError::at(
                    path,
                    format!(
                        "component '{}': invalid children format: expected string, component, \
                         or array of components, got {found}",
                        spec.label()
                    ),
                ));
                tracing::warn!(
                    path = %format_path(path),
                    "pruned component with malformed children"
                );
                path.pop();
                return None;
            }
        }
        path.pop();
    }

    Some(spec)
}

/// `Err(found)` when `children` is none of the four accepted shapes.
fn parse_children(
    value: &Value,
    path: &mut Vec<SpecPathElem>,
    errors: &mut Vec<SpecError>,
) -> Result<Children, String> {
    match value {
        Value::Null => Ok(Children::Absent),
        Value::String(text) => Ok(Children::Text(text.clone())),
        Value::Object(_) if !has_type(value) => Err(child_kind(value).to_owned()),
        Value::Object(_) => Ok(parse_component(value, path, errors)
            .map(|child| Children::Single(Box::new(child)))
            .unwrap_or_default()),
        Value::Array(items) => {
            if let Some((i, item)) = items.iter().enumerate().find(|(_, v)| !has_type(v)) {
                return Err(format!("array with {} at index {i}", child_kind(item)));
            }
            let mut children = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                path.push(SpecPathElem::Index(i));
                if let Some(child) = parse_component(item, path, errors) {
                    children.push(child);
                }
                path.pop();
            }
            Ok(Children::Many(children))
        }
        other => Err(json_kind(other).to_owned()),
    }
}

fn child_kind(value: &Value) -> &'static str {
    match value {
        Value::Object(_) => "object without a string 'type'",
        other => json_kind(other),
    }
}

fn validate_events(
    obj: &Map<String, Value>,
    path: &mut Vec<SpecPathElem>,
    errors: &mut Vec<SpecError>,
) -> bool {
    let Some(events) = obj.get("events") else {
        return true;
    };
    path.push(SpecPathElem::field("events"));
    let ok = match events {
        Value::Null => true,
        Value::Object(entries) => {
            let mut ok = true;
            for (name, handler) in entries {
                let has_action = handler.get("action").is_some_and(Value::is_string);
                if !has_action {
                    path.push(SpecPathElem::Field(name.clone()));
                    errors.push(SpecError::at(
                        path,
                        format!(
                            "invalid event handler for '{name}': missing required 'action' property"
                        ),
                    ));
                    path.pop();
                    ok = false;
                }
            }
            ok
        }
        other => {
            errors.push(SpecError::at(
                path,
                format!("events must be an object, got {}", json_kind(other)),
            ));
            false
        }
    };
    path.pop();
    ok
}

fn has_type(value: &Value) -> bool {
    value.get("type").is_some_and(Value::is_string)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spec/parse.rs"]
mod tests;
