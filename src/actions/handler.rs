use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

type HandlerFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A named callback supplied by the caller.
///
/// Cloning is cheap; clones share the same function.
#[derive(Clone)]
pub struct Handler {
    name: Arc<str>,
    f: Arc<HandlerFn>,
}

impl Handler {
    /// Wrap `f` under `name`.
    pub fn new(
        name: impl Into<String>,
        f: impl Fn(&[Value]) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: Arc::from(name.into()),
            f: Arc::new(f),
        }
    }

    /// The name this handler was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the callback.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.f)(args)
    }

    /// `true` if both handles point at the same function.
    pub fn same_fn(&self, other: &Handler) -> bool {
        Arc::ptr_eq(&self.f, &other.f)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handler").field(&self.name).finish()
    }
}

/// Result of looking a handler name up in a [`HandlerContext`].
#[derive(Debug, Clone)]
pub enum HandlerLookup {
    /// The name is registered.
    Found(Handler),
    /// The name is not registered.
    NotFound,
}

/// Caller-supplied handler table plus ambient data threaded through a pass.
///
/// The handler table is shared behind an `Arc`, so scoping ambient data for a subtree
/// ([`HandlerContext::overlay`]) copies only the ambient map.
#[derive(Debug, Clone, Default)]
pub struct HandlerContext {
    handlers: Arc<BTreeMap<String, Handler>>,
    ambient: Map<String, Value>,
}

impl HandlerContext {
    /// Empty context: no handlers, no ambient data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `f` under `name`, replacing any previous handler with that name.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        f: impl Fn(&[Value]) -> Value + Send + Sync + 'static,
    ) {
        let name = name.into();
        let handler = Handler::new(name.clone(), f);
        Arc::make_mut(&mut self.handlers).insert(name, handler);
    }

    /// Builder-style [`HandlerContext::insert`].
    pub fn with_handler(
        mut self,
        name: impl Into<String>,
        f: impl Fn(&[Value]) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.insert(name, f);
        self
    }

    /// Set one ambient value.
    pub fn with_ambient(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.ambient.insert(key.into(), value.into());
        self
    }

    /// A context whose handlers only log their invocation and return `null`.
    pub fn with_placeholders<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        let mut ctx = Self::new();
        for name in names {
            let name = name.into();
            let logged = name.clone();
            ctx.insert(name, move |args: &[Value]| {
                tracing::info!(handler = %logged, args = args.len(), "placeholder handler invoked");
                Value::Null
            });
        }
        ctx
    }

    /// Look `name` up. Never fails; absence is [`HandlerLookup::NotFound`].
    pub fn lookup(&self, name: &str) -> HandlerLookup {
        match self.handlers.get(name) {
            Some(h) => HandlerLookup::Found(h.clone()),
            None => HandlerLookup::NotFound,
        }
    }

    /// `true` if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered handler names in sorted order.
    pub fn handler_names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Ambient data visible at this point of the tree.
    pub fn ambient(&self) -> &Map<String, Value> {
        &self.ambient
    }

    /// A context for a subtree: same handlers, ambient data overlaid with `overrides`.
    pub fn overlay(&self, overrides: &Map<String, Value>) -> Self {
        let mut ambient = self.ambient.clone();
        for (k, v) in overrides {
            ambient.insert(k.clone(), v.clone());
        }
        Self {
            handlers: Arc::clone(&self.handlers),
            ambient,
        }
    }

    /// Set `key` only if the caller has not already set it.
    pub(crate) fn seed_ambient(&mut self, key: &str, value: Value) {
        self.ambient.entry(key).or_insert(value);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/actions/handler.rs"]
mod tests;
