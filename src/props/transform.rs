use crate::props::rules::rules_for;
use crate::resolve::resolver::pascal_case_variant;
use serde_json::{Map, Value};

/// A node's property set: JSON object keyed by property name.
pub type PropertyMap = Map<String, Value>;

/// Normalize `props` into the shape the implementation of `type_name` expects.
///
/// Rules are looked up by the PascalCase form of the type name, so `heading` and `Heading`
/// share a table. Types without rules get their properties back unchanged. Every rule is
/// idempotent, so transforming already-normalized properties is a no-op.
pub fn transform(type_name: &str, mut props: PropertyMap) -> PropertyMap {
    for rule in rules_for(&pascal_case_variant(type_name)) {
        rule.apply(&mut props);
    }
    props
}

#[cfg(test)]
#[path = "../../tests/unit/props/transform.rs"]
mod tests;
