use crate::resolve::registry::RenderableRegistry;
use std::borrow::Cow;

/// Which lookup step found the implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvedVia {
    /// The type name was a registry key as written.
    Exact,
    /// Only the PascalCase variant was registered.
    PascalCase,
}

/// Outcome of resolving one type name.
#[derive(Debug)]
pub enum Resolution<'a, I> {
    /// The name (or its PascalCase variant) is registered.
    Found {
        /// Registry key that matched.
        key: Cow<'a, str>,
        /// The registered implementation.
        implementation: &'a I,
        /// Which lookup step matched.
        via: ResolvedVia,
    },
    /// Neither lookup matched.
    NotFound,
}

impl<I> Clone for Resolution<'_, I> {
    fn clone(&self) -> Self {
        match self {
            Self::Found {
                key,
                implementation,
                via,
            } => Self::Found {
                key: key.clone(),
                implementation: *implementation,
                via: *via,
            },
            Self::NotFound => Self::NotFound,
        }
    }
}

impl<'a, I> Resolution<'a, I> {
    /// The implementation, if found.
    pub fn implementation(&self) -> Option<&'a I> {
        match self {
            Self::Found { implementation, .. } => Some(implementation),
            Self::NotFound => None,
        }
    }

    /// `true` if the name resolved.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// The PascalCase fallback: first character uppercased, the rest unchanged.
///
/// Returns `Cow::Borrowed` when the name is already in that form.
pub fn pascal_case_variant(name: &str) -> Cow<'_, str> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Cow::Borrowed(name);
    };
    if first.to_uppercase().eq(std::iter::once(first)) {
        return Cow::Borrowed(name);
    }
    let mut out = String::with_capacity(name.len());
    out.extend(first.to_uppercase());
    out.push_str(chars.as_str());
    Cow::Owned(out)
}

/// Maps type names to implementations through a borrowed registry.
///
/// Resolution is a pure function of the name and the registry; nothing is cached.
#[derive(Debug)]
pub struct TypeResolver<'r, R> {
    registry: &'r R,
    pascal_case_fallback: bool,
}

impl<R> Clone for TypeResolver<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for TypeResolver<'_, R> {}

impl<'r, R: RenderableRegistry> TypeResolver<'r, R> {
    /// Resolver with the PascalCase fallback enabled.
    pub fn new(registry: &'r R) -> Self {
        Self {
            registry,
            pascal_case_fallback: true,
        }
    }

    /// Enable or disable the PascalCase fallback step.
    pub fn with_pascal_case_fallback(mut self, enabled: bool) -> Self {
        self.pascal_case_fallback = enabled;
        self
    }

    /// Resolve `type_name`: exact key first, then its PascalCase variant.
    pub fn resolve<'a>(&self, type_name: &'a str) -> Resolution<'a, R::Implementation>
    where
        'r: 'a,
    {
        if let Some(implementation) = self.registry.lookup(type_name) {
            return Resolution::Found {
                key: Cow::Borrowed(type_name),
                implementation,
                via: ResolvedVia::Exact,
            };
        }

        if self.pascal_case_fallback {
            let variant = pascal_case_variant(type_name);
            if let Cow::Owned(variant) = variant {
                if let Some(implementation) = self.registry.lookup(&variant) {
                    tracing::debug!(type_name, key = %variant, "resolved via PascalCase fallback");
                    return Resolution::Found {
                        key: Cow::Owned(variant),
                        implementation,
                        via: ResolvedVia::PascalCase,
                    };
                }
            }
        }

        Resolution::NotFound
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/resolver.rs"]
mod tests;
