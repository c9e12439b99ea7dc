use std::collections::{BTreeMap, HashMap};

/// Read-only lookup from a type name to a renderable implementation.
///
/// The resolver only ever calls [`RenderableRegistry::lookup`]; a pipeline borrows the registry
/// immutably for the whole pass.
pub trait RenderableRegistry {
    /// What a type name resolves to.
    type Implementation;

    /// Exact-key lookup.
    fn lookup(&self, name: &str) -> Option<&Self::Implementation>;
}

impl<I> RenderableRegistry for HashMap<String, I> {
    type Implementation = I;

    fn lookup(&self, name: &str) -> Option<&I> {
        self.get(name)
    }
}

impl<I> RenderableRegistry for BTreeMap<String, I> {
    type Implementation = I;

    fn lookup(&self, name: &str) -> Option<&I> {
        self.get(name)
    }
}

/// Explicitly constructed registry of named implementations.
#[derive(Debug, Clone)]
pub struct ComponentRegistry<I> {
    entries: BTreeMap<String, I>,
}

impl<I> Default for ComponentRegistry<I> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<I> ComponentRegistry<I> {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `implementation` under `name`, returning the previous entry if any.
    pub fn register(&mut self, name: impl Into<String>, implementation: I) -> Option<I> {
        self.entries.insert(name.into(), implementation)
    }

    /// Builder-style [`ComponentRegistry::register`].
    pub fn with(mut self, name: impl Into<String>, implementation: I) -> Self {
        self.register(name, implementation);
        self
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<I> RenderableRegistry for ComponentRegistry<I> {
    type Implementation = I;

    fn lookup(&self, name: &str) -> Option<&I> {
        self.entries.get(name)
    }
}

/// The built-in component vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[allow(missing_docs)]
pub enum ComponentKind {
    // Layout
    Box,
    Container,
    Grid,
    Flex,
    AspectRatio,
    Separator,
    // Typography
    Text,
    Heading,
    BlockQuote,
    // Controls and display
    Button,
    Card,
    Badge,
    Avatar,
    Image,
    Skeleton,
    Label,
    Input,
}

impl ComponentKind {
    /// Every built-in kind, in registry order.
    pub const ALL: [ComponentKind; 17] = [
        Self::Box,
        Self::Container,
        Self::Grid,
        Self::Flex,
        Self::AspectRatio,
        Self::Separator,
        Self::Text,
        Self::Heading,
        Self::BlockQuote,
        Self::Button,
        Self::Card,
        Self::Badge,
        Self::Avatar,
        Self::Image,
        Self::Skeleton,
        Self::Label,
        Self::Input,
    ];

    /// Registry key (PascalCase).
    pub fn name(self) -> &'static str {
        match self {
            Self::Box => "Box",
            Self::Container => "Container",
            Self::Grid => "Grid",
            Self::Flex => "Flex",
            Self::AspectRatio => "AspectRatio",
            Self::Separator => "Separator",
            Self::Text => "Text",
            Self::Heading => "Heading",
            Self::BlockQuote => "BlockQuote",
            Self::Button => "Button",
            Self::Card => "Card",
            Self::Badge => "Badge",
            Self::Avatar => "Avatar",
            Self::Image => "Image",
            Self::Skeleton => "Skeleton",
            Self::Label => "Label",
            Self::Input => "Input",
        }
    }
}

impl ComponentRegistry<ComponentKind> {
    /// Registry with every [`ComponentKind`] under its PascalCase name.
    pub fn standard() -> Self {
        ComponentKind::ALL
            .into_iter()
            .fold(Self::new(), |reg, kind| reg.with(kind.name(), kind))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/registry.rs"]
mod tests;
