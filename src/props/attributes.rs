//! Spec-level attributes merged into a node's raw property set before normalization.

use crate::actions::binder::is_event_prop;
use crate::props::transform::PropertyMap;
use crate::resolve::resolver::pascal_case_variant;
use crate::spec::model::ComponentSpec;
use serde_json::Value;

/// Property name an `events` entry is exposed under: `click` -> `onClick`.
///
/// Names already in `onX` form are kept as written.
pub fn event_prop_name(event: &str) -> String {
    if is_event_prop(event) {
        return event.to_owned();
    }
    format!("on{}", pascal_case_variant(event))
}

/// The raw property set of `spec`: attributes, then event props, then explicit `properties`.
///
/// Later layers win on key collision. With `passthrough` off only event props and explicit
/// properties are included.
pub fn raw_properties(spec: &ComponentSpec, passthrough: bool) -> PropertyMap {
    let mut out = if passthrough {
        spec_attributes(spec)
    } else {
        PropertyMap::new()
    };

    for (name, event) in &spec.events {
        out.insert(event_prop_name(name), Value::String(event.action.clone()));
    }

    for (k, v) in &spec.properties {
        out.insert(k.clone(), v.clone());
    }
    out
}

/// `id`, `className`, `style`, `asChild`, accessibility, `data-*` and `data-testid` attributes.
pub fn spec_attributes(spec: &ComponentSpec) -> PropertyMap {
    let mut out = PropertyMap::new();
    put(&mut out, "id", spec.id.clone());
    put(&mut out, "className", spec.class_name.clone());
    put(&mut out, "style", spec.style.clone());
    put(&mut out, "asChild", spec.as_child);

    if let Some(a11y) = &spec.a11y {
        put(&mut out, "aria-label", a11y.aria_label.clone());
        put(&mut out, "aria-describedby", a11y.aria_described_by.clone());
        put(&mut out, "aria-controls", a11y.aria_controls.clone());
        put(&mut out, "aria-expanded", a11y.aria_expanded);
        put(&mut out, "aria-hidden", a11y.aria_hidden);
        put(&mut out, "tabIndex", a11y.tab_index);
        put(&mut out, "aria-haspopup", a11y.has_popup.clone());
        put(&mut out, "aria-live", a11y.aria_live.clone());
        put(&mut out, "aria-atomic", a11y.aria_atomic);
        put(&mut out, "role", a11y.role.clone());
    }

    if let Some(data) = &spec.data {
        for (k, v) in data {
            out.insert(format!("data-{k}"), v.clone());
        }
    }
    put(&mut out, "data-testid", spec.test_id.clone());
    out
}

fn put<T: Into<Value>>(out: &mut PropertyMap, key: &str, value: Option<T>) {
    if let Some(v) = value {
        out.insert(key.to_owned(), v.into());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/props/attributes.rs"]
mod tests;
