use crate::actions::binder::{BindOutcome, bind_actions};
use crate::actions::handler::HandlerContext;
use crate::config::PipelineOptions;
use crate::foundation::ids::NodeIdx;
use crate::pipeline::diagnostics::{Diagnostic, Severity};
use crate::pipeline::host::{HostNode, ParentInfo, PlaceholderNode, RenderingHost};
use crate::props::attributes::raw_properties;
use crate::props::transform::transform;
use crate::resolve::registry::RenderableRegistry;
use crate::resolve::resolver::{Resolution, TypeResolver};
use crate::spec::model::{ComponentSpec, UISpecification};
use crate::tree::builder::ComponentTree;
use serde_json::Value;

/// Counters for one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct PassStats {
    /// Spec nodes in the document.
    pub nodes: usize,
    /// Nodes handed to [`RenderingHost::instantiate`].
    pub rendered: usize,
    /// Nodes handed to [`RenderingHost::placeholder`].
    pub placeholders: usize,
    /// Descendants of placeholders, never processed.
    pub skipped: usize,
    /// Callbacks bound, nested ones included.
    pub handlers_bound: usize,
    /// Action references dropped for lack of a handler.
    pub handlers_missing: usize,
}

/// Result of one pass: the host's output for the root plus everything that degraded.
#[derive(Debug)]
pub struct PassOutput<O> {
    /// Host output for the root node.
    pub root: O,
    /// Non-fatal problems in document order.
    pub diagnostics: Vec<Diagnostic>,
    /// Counters.
    pub stats: PassStats,
}

impl<O> PassOutput<O> {
    /// `true` if any diagnostic is a warning.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Warning)
    }
}

/// Resolution pipeline over a borrowed registry.
///
/// The registry is borrowed immutably for the pipeline's lifetime, so every pass sees the same
/// snapshot. A pass never fails: unresolved types and missing handlers become diagnostics.
#[derive(Debug)]
pub struct Pipeline<'r, R> {
    registry: &'r R,
    options: PipelineOptions,
}

impl<'r, R: RenderableRegistry> Pipeline<'r, R> {
    /// Pipeline with default options.
    pub fn new(registry: &'r R) -> Self {
        Self {
            registry,
            options: PipelineOptions::default(),
        }
    }

    /// Replace the options.
    pub fn with_options(mut self, options: PipelineOptions) -> Self {
        self.options = options;
        self
    }

    /// Options in effect.
    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// The type resolver this pipeline uses.
    pub fn resolver(&self) -> TypeResolver<'r, R> {
        TypeResolver::new(self.registry)
            .with_pascal_case_fallback(self.options.pascal_case_fallback)
    }

    /// Run one pass over `spec`, instantiating every node through `host`.
    ///
    /// Per node: resolve, transform, bind, process children in order, instantiate.
    #[tracing::instrument(skip(self, spec, ctx, host), fields(root = %spec.type_name))]
    pub fn process<H>(
        &self,
        spec: &ComponentSpec,
        ctx: &HandlerContext,
        host: &mut H,
    ) -> PassOutput<H::Output>
    where
        H: RenderingHost<R::Implementation>,
    {
        self.run(spec, ctx, host, "$")
    }

    /// Run one pass over a full document.
    ///
    /// The document's `theme` and `state.initial` are seeded into the ambient data as `theme`
    /// and `state`, unless the caller already set those keys.
    #[tracing::instrument(skip(self, doc, ctx, host), fields(version = %doc.version))]
    pub fn process_document<H>(
        &self,
        doc: &UISpecification,
        ctx: &HandlerContext,
        host: &mut H,
    ) -> PassOutput<H::Output>
    where
        H: RenderingHost<R::Implementation>,
    {
        if doc.theme.is_none() && doc.initial_state().is_none() {
            return self.run(&doc.root, ctx, host, "$.root");
        }
        let mut seeded = ctx.clone();
        if let Some(theme) = &doc.theme {
            seeded.seed_ambient("theme", Value::Object(theme.clone()));
        }
        if let Some(initial) = doc.initial_state() {
            seeded.seed_ambient("state", Value::Object(initial.clone()));
        }
        self.run(&doc.root, &seeded, host, "$.root")
    }

    fn run<H>(
        &self,
        spec: &ComponentSpec,
        ctx: &HandlerContext,
        host: &mut H,
        root_path: &str,
    ) -> PassOutput<H::Output>
    where
        H: RenderingHost<R::Implementation>,
    {
        let tree = ComponentTree::build(spec);
        let mut pass = Pass {
            pipeline: self,
            tree: &tree,
            root_path,
            host,
            diagnostics: Vec::new(),
            stats: PassStats {
                nodes: tree.len(),
                ..PassStats::default()
            },
        };
        let root = pass.visit(tree.root(), ctx);
        tracing::debug!(
            rendered = pass.stats.rendered,
            placeholders = pass.stats.placeholders,
            diagnostics = pass.diagnostics.len(),
            "pass complete"
        );
        PassOutput {
            root,
            diagnostics: pass.diagnostics,
            stats: pass.stats,
        }
    }
}

struct Pass<'p, 't, 's, R, H> {
    pipeline: &'p Pipeline<'p, R>,
    tree: &'t ComponentTree<'s>,
    root_path: &'p str,
    host: &'p mut H,
    diagnostics: Vec<Diagnostic>,
    stats: PassStats,
}

impl<R, H> Pass<'_, '_, '_, R, H>
where
    R: RenderableRegistry,
    H: RenderingHost<R::Implementation>,
{
    fn visit(&mut self, idx: NodeIdx, ctx: &HandlerContext) -> H::Output {
        let tree = self.tree;
        let node = tree.node(idx);
        let spec = node.spec;
        let path = tree.path_from(self.root_path, idx);
        let key = tree.child_key(idx);

        let resolution = self.pipeline.resolver().resolve(&spec.type_name);
        let Resolution::Found {
            key: resolved_name,
            implementation,
            ..
        } = resolution
        else {
            let skipped = tree.subtree_len(idx) - 1;
            tracing::warn!(type_name = %spec.type_name, %path, skipped, "unknown component type");
            self.stats.placeholders += 1;
            self.stats.skipped += skipped;
            self.diagnostics
                .push(Diagnostic::unresolved_type(path.clone(), &spec.type_name));
            return self.host.placeholder(PlaceholderNode {
                type_name: &spec.type_name,
                spec,
                key,
                path,
                development: self.pipeline.options.development,
            });
        };

        let scoped;
        let ctx = match &spec.context {
            Some(overrides) => {
                scoped = ctx.overlay(overrides);
                &scoped
            }
            None => ctx,
        };

        let raw = raw_properties(spec, self.pipeline.options.passthrough_attributes);
        let props = transform(&spec.type_name, raw);
        let BindOutcome { bound, missing } = bind_actions(props, ctx);
        self.stats.handlers_bound += bound.handler_count();
        self.stats.handlers_missing += missing.len();
        if self.pipeline.options.report_missing_handlers {
            self.diagnostics.extend(
                missing
                    .into_iter()
                    .map(|m| Diagnostic::missing_handler(path.clone(), m)),
            );
        }

        let children: Vec<H::Output> = tree
            .children(idx)
            .iter()
            .map(|&child| self.visit(child, ctx))
            .collect();

        let parent = node.parent.map(|p| {
            let parent_spec = tree.node(p).spec;
            ParentInfo {
                idx: p,
                type_name: &parent_spec.type_name,
                id: parent_spec.id.as_deref(),
            }
        });

        self.stats.rendered += 1;
        self.host.instantiate(HostNode {
            implementation,
            type_name: &resolved_name,
            props: bound.props,
            actions: bound.actions,
            children,
            text: node.text,
            spec,
            key,
            parent,
            path,
            context: ctx,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/process.rs"]
mod tests;
