use crate::actions::binder::MissingHandler;
use std::fmt;

/// How serious a [`Diagnostic`] is. Neither level aborts a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Expected degradation, e.g. an optional handler left unbound.
    Info,
    /// Part of the document could not be rendered as written.
    Warning,
}

/// What went wrong at one node.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// No implementation for the type name; a placeholder was emitted instead.
    UnresolvedType {
        /// Type name as written in the spec.
        type_name: String,
    },
    /// An action reference named a handler the context does not have; the property was dropped.
    MissingHandler {
        /// Property key that held the reference.
        key: String,
        /// Handler name that was looked up.
        handler: String,
    },
}

/// A non-fatal problem recorded during a pass.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,
    /// Node location, `$.children[1].children`.
    pub path: String,
    /// The problem.
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub(crate) fn unresolved_type(path: String, type_name: &str) -> Self {
        Self {
            severity: Severity::Warning,
            path,
            kind: DiagnosticKind::UnresolvedType {
                type_name: type_name.to_owned(),
            },
        }
    }

    pub(crate) fn missing_handler(path: String, missing: MissingHandler) -> Self {
        Self {
            severity: Severity::Info,
            path,
            kind: DiagnosticKind::MissingHandler {
                key: missing.key,
                handler: missing.handler,
            },
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => f.write_str("info"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: ", self.severity, self.path)?;
        match &self.kind {
            DiagnosticKind::UnresolvedType { type_name } => {
                write!(f, "unknown component type '{type_name}'")
            }
            DiagnosticKind::MissingHandler { key, handler } => {
                write!(f, "handler '{handler}' for '{key}' not found; property dropped")
            }
        }
    }
}
