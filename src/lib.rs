//! sdui turns declarative, JSON-shaped component specifications into host-renderable node trees.
//!
//! A caller hands over a tree of typed nodes (type name, properties, children, action references).
//! The pipeline then, for every node:
//!
//! 1. **Resolve** the type name against a [`RenderableRegistry`] (exact key, then PascalCase).
//! 2. **Transform** the raw properties with the per-type rule table ([`transform`]).
//! 3. **Bind** string action references to callbacks from a [`HandlerContext`].
//! 4. **Recurse** into the children, in document order.
//! 5. **Instantiate** the prepared node through a [`RenderingHost`].
//!
//! Failures local to a subtree (unknown types, missing handlers) degrade into
//! [`Diagnostic`]s instead of aborting the pass.
//!
//! # Getting started
//!
//! ```ignore
//! use sdui::{ComponentRegistry, HandlerContext, Pipeline, SpecParser, TreeDumpHost};
//!
//! let doc = SpecParser::new().parse_str(json)?.into_strict()?;
//! let registry = ComponentRegistry::standard();
//! let ctx = HandlerContext::new();
//! let out = Pipeline::new(&registry).process(doc.root(), &ctx, &mut TreeDumpHost);
//! println!("{}", serde_json::to_string_pretty(&out.root)?);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Handler context, action binding and action-reference discovery.
pub mod actions;
/// Pipeline options.
pub mod config;
/// Resolution pipeline, rendering host contract and diagnostics.
pub mod pipeline;
/// Per-type property normalization and spec attribute passthrough.
pub mod props;
/// Renderable registry and type-name resolution.
pub mod resolve;
/// Specification model and parser.
pub mod spec;
/// Parent-linked node tree built from a specification.
pub mod tree;

pub use crate::foundation::error::{SduiError, SduiResult};
pub use crate::foundation::ids::NodeIdx;

pub use crate::actions::binder::{
    ACTION_SUFFIX, BindOutcome, BoundAction, BoundProperties, MissingHandler, bind_actions,
    is_event_prop,
};
pub use crate::actions::handler::{Handler, HandlerContext, HandlerLookup};
pub use crate::actions::refs::collect_action_refs;
pub use crate::config::PipelineOptions;
pub use crate::pipeline::diagnostics::{Diagnostic, DiagnosticKind, Severity};
pub use crate::pipeline::host::{
    HostNode, ParentInfo, PlaceholderNode, RenderedNode, RenderingHost, TreeDumpHost,
};
pub use crate::pipeline::process::{PassOutput, PassStats, Pipeline};
pub use crate::props::transform::{PropertyMap, transform};
pub use crate::resolve::registry::{ComponentKind, ComponentRegistry, RenderableRegistry};
pub use crate::resolve::resolver::{Resolution, ResolvedVia, TypeResolver, pascal_case_variant};
pub use crate::spec::model::{
    A11ySpec, Children, ComponentSpec, Document, EventSpec, SpecificationMetadata, StateSpec,
    UISpecification,
};
pub use crate::spec::parse::{ParseReport, SpecError, SpecErrors, SpecParser, SpecPathElem};
pub use crate::tree::builder::{ComponentNode, ComponentTree, NodeContent};
