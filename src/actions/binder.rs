use crate::actions::handler::{Handler, HandlerContext, HandlerLookup};
use crate::props::transform::PropertyMap;
use serde_json::Value;
use std::collections::BTreeMap;

/// Reserved key suffix marking a property as an action reference.
pub const ACTION_SUFFIX: &str = "Action";

/// `true` for event-prop names: `on` followed by an uppercase letter (`onClick`).
pub fn is_event_prop(key: &str) -> bool {
    key.strip_prefix("on")
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_uppercase)
}

/// `submitAction` -> `submit`. The bare suffix is not an action key.
pub(crate) fn strip_action_suffix(key: &str) -> Option<&str> {
    key.strip_suffix(ACTION_SUFFIX).filter(|s| !s.is_empty())
}

/// A property whose value was replaced by callbacks.
#[derive(Debug, Clone)]
pub enum BoundAction {
    /// A single resolved callback.
    Handler(Handler),
    /// A nested action object: its event props bound, every other key kept as-is.
    Object {
        /// Nested keys that are not bound event props.
        props: PropertyMap,
        /// Nested event props resolved to callbacks.
        handlers: BTreeMap<String, Handler>,
    },
}

/// Properties after binding: plain values and bound actions, keyed by final property name.
#[derive(Debug, Clone, Default)]
pub struct BoundProperties {
    /// Every property that is not a bound action.
    pub props: PropertyMap,
    /// Bound actions under their final key.
    pub actions: BTreeMap<String, BoundAction>,
}

impl BoundProperties {
    /// The callback bound under `key`, if it is a single handler.
    pub fn handler(&self, key: &str) -> Option<&Handler> {
        match self.actions.get(key)? {
            BoundAction::Handler(h) => Some(h),
            BoundAction::Object { .. } => None,
        }
    }

    /// `true` if `key` is present as a plain value or as a bound action.
    pub fn contains_key(&self, key: &str) -> bool {
        self.props.contains_key(key) || self.actions.contains_key(key)
    }

    /// Number of callbacks bound, nested ones included.
    pub fn handler_count(&self) -> usize {
        self.actions
            .values()
            .map(|a| match a {
                BoundAction::Handler(_) => 1,
                BoundAction::Object { handlers, .. } => handlers.len(),
            })
            .sum()
    }
}

/// An action reference whose handler is absent from the context.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MissingHandler {
    /// Property key that held the reference (`parent.child` for nested keys).
    pub key: String,
    /// Handler name that was looked up.
    pub handler: String,
}

/// Output of [`bind_actions`].
#[derive(Debug, Clone, Default)]
pub struct BindOutcome {
    /// The bound property set.
    pub bound: BoundProperties,
    /// References that were dropped because no handler matched.
    pub missing: Vec<MissingHandler>,
}

/// Replace action references in `props` with callbacks from `ctx`.
///
/// Per top-level key:
/// 1. `<name>Action: "<handler>"` binds the handler under `<name>`.
/// 2. `onX: "<handler>"` binds the handler under `onX`.
/// 3. `<name>Action: { ... }` binds the object's own `onX` strings, leaving its other keys alone.
/// 4. Everything else passes through.
///
/// A reference to an unknown handler is dropped and listed in [`BindOutcome::missing`]; binding
/// never fails.
pub fn bind_actions(props: PropertyMap, ctx: &HandlerContext) -> BindOutcome {
    let mut out = BindOutcome::default();

    for (key, value) in props {
        let action_name = strip_action_suffix(&key).map(str::to_owned);
        match (action_name, value) {
            (Some(name), Value::String(handler)) => {
                if let Some(h) = lookup(ctx, &key, handler, &mut out.missing) {
                    out.bound.actions.insert(name, BoundAction::Handler(h));
                }
            }
            (Some(_), Value::Object(nested)) => {
                let mut props = PropertyMap::new();
                let mut handlers = BTreeMap::new();
                for (nested_key, nested_value) in nested {
                    match nested_value {
                        Value::String(handler) if is_event_prop(&nested_key) => {
                            let path = format!("{key}.{nested_key}");
                            if let Some(h) = lookup(ctx, &path, handler, &mut out.missing) {
                                handlers.insert(nested_key, h);
                            }
                        }
                        other => {
                            props.insert(nested_key, other);
                        }
                    }
                }
                out.bound
                    .actions
                    .insert(key, BoundAction::Object { props, handlers });
            }
            (None, Value::String(handler)) if is_event_prop(&key) => {
                if let Some(h) = lookup(ctx, &key, handler, &mut out.missing) {
                    out.bound.actions.insert(key, BoundAction::Handler(h));
                }
            }
            (_, value) => {
                out.bound.props.insert(key, value);
            }
        }
    }

    out
}

fn lookup(
    ctx: &HandlerContext,
    key: &str,
    handler: String,
    missing: &mut Vec<MissingHandler>,
) -> Option<Handler> {
    match ctx.lookup(&handler) {
        HandlerLookup::Found(h) => Some(h),
        HandlerLookup::NotFound => {
            tracing::debug!(key, handler = %handler, "action handler not found; dropping property");
            missing.push(MissingHandler {
                key: key.to_owned(),
                handler,
            });
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/actions/binder.rs"]
mod tests;
