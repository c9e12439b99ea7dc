use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sdui", version)]
struct Cli {
    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a specification and report structural errors.
    Check(CheckArgs),
    /// Run the resolution pipeline and print the rendered tree as JSON.
    Resolve(ResolveArgs),
    /// List every handler name the specification references.
    Refs(RefsArgs),
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input specification JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct ResolveArgs {
    /// Input specification JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Pipeline options JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bind every referenced handler to a logging placeholder.
    #[arg(long)]
    stub_handlers: bool,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RefsArgs {
    /// Input specification JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Resolve(args) => cmd_resolve(args),
        Command::Refs(args) => cmd_refs(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_spec(path: &Path) -> anyhow::Result<sdui::ParseReport> {
    let report = sdui::SpecParser::new()
        .parse_path(path)
        .with_context(|| format!("parse specification '{}'", path.display()))?;
    Ok(report)
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let report = read_spec(&args.in_path)?;
    for e in &report.errors {
        eprintln!("{e}");
    }
    if !report.is_clean() {
        anyhow::bail!(
            "{} structural error(s) in '{}'",
            report.errors.len(),
            args.in_path.display()
        );
    }
    eprintln!("ok: {} nodes", report.document.root().count_nodes());
    Ok(())
}

fn cmd_resolve(args: ResolveArgs) -> anyhow::Result<()> {
    let report = read_spec(&args.in_path)?;
    for e in &report.errors {
        eprintln!("pruned: {e}");
    }

    let options = match &args.config {
        Some(path) => sdui::PipelineOptions::from_path(path)?,
        None => sdui::PipelineOptions::default(),
    };
    let ctx = if args.stub_handlers {
        sdui::HandlerContext::with_placeholders(sdui::collect_action_refs(report.document.root()))
    } else {
        sdui::HandlerContext::new()
    };

    let registry = sdui::ComponentRegistry::standard();
    let pipeline = sdui::Pipeline::new(&registry).with_options(options);
    let out = match &report.document {
        sdui::Document::Full(doc) => pipeline.process_document(doc, &ctx, &mut sdui::TreeDumpHost),
        sdui::Document::Component(spec) => pipeline.process(spec, &ctx, &mut sdui::TreeDumpHost),
    };

    for d in &out.diagnostics {
        eprintln!("{d}");
    }
    let s = out.stats;
    eprintln!(
        "nodes={} rendered={} placeholders={} skipped={} handlers_bound={} handlers_missing={}",
        s.nodes, s.rendered, s.placeholders, s.skipped, s.handlers_bound, s.handlers_missing
    );

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &out.root).with_context(|| "write tree JSON")?;
            w.flush()
                .with_context(|| format!("write output '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            serde_json::to_writer_pretty(&mut w, &out.root).with_context(|| "write tree JSON")?;
            writeln!(w)?;
        }
    }
    Ok(())
}

fn cmd_refs(args: RefsArgs) -> anyhow::Result<()> {
    let report = read_spec(&args.in_path)?;
    for name in sdui::collect_action_refs(report.document.root()) {
        println!("{name}");
    }
    Ok(())
}
