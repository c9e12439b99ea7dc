use crate::actions::binder::{is_event_prop, strip_action_suffix};
use crate::spec::model::ComponentSpec;
use serde_json::Value;
use std::collections::BTreeSet;

/// Every handler name referenced anywhere in the subtree of `spec`.
///
/// Covers `<name>Action` strings, `onX` strings, `onX` strings nested one level inside an
/// action object, and `events` entries.
pub fn collect_action_refs(spec: &ComponentSpec) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    collect_into(spec, &mut out);
    out
}

fn collect_into(spec: &ComponentSpec, out: &mut BTreeSet<String>) {
    for (key, value) in &spec.properties {
        let is_action_key = strip_action_suffix(key).is_some();
        match value {
            Value::String(name) if is_action_key || is_event_prop(key) => {
                out.insert(name.clone());
            }
            Value::Object(nested) if is_action_key => {
                let names = nested
                    .iter()
                    .filter(|(k, _)| is_event_prop(k))
                    .filter_map(|(_, v)| v.as_str());
                out.extend(names.map(str::to_owned));
            }
            _ => {}
        }
    }
    out.extend(spec.events.values().map(|e| e.action.clone()));

    for child in spec.children.specs() {
        collect_into(child, out);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/actions/refs.rs"]
mod tests;
