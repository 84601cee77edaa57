//! `quad-diagram`: Maps an RDF document onto diagram nodes and edges.
//!
//! Reads N-Quads, TriG, Turtle, N-Triples or a JSON array of quads, maps
//! it with an optional property/class synopsis, prefix registry and colour
//! palette, optionally collapses nodes, and prints the diagram as JSON.
//!
//! **Usage:**
//! ```
//! quad-diagram --input <file> [--format <fmt>] [--properties <json>]
//!              [--classes <json>] [--registry <json>] [--palette <json>]
//!              [--collapse <iri>]... [--threshold <n>] [--changes-only] [--pretty]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use quad_diagram::loader::{load_str, DocumentFormat};
use quad_diagram::normalize::quads_from_json;
use quad_diagram::{
    map_quads_to_diagram, visibility_changes, MapOptions, Palette, PrefixRegistry, Quad,
    SchemaEntry,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Map an RDF document onto diagram JSON.
#[derive(Parser)]
#[command(
    name = "quad-diagram",
    about = "Map RDF quads onto diagram nodes and edges"
)]
struct Args {
    /// Input document.
    #[arg(long)]
    input: PathBuf,

    /// Input format: nquads, trig, turtle, ntriples or json (default: from the file extension).
    #[arg(long)]
    format: Option<String>,

    /// Graph name given to Turtle and N-Triples statements (default: the data graph).
    #[arg(long)]
    graph: Option<String>,

    /// JSON array of known properties: `[{ "iri", "label"?, "kind"? }]`.
    #[arg(long)]
    properties: Option<PathBuf>,

    /// JSON array of known classes, same shape as `--properties`.
    #[arg(long)]
    classes: Option<PathBuf>,

    /// JSON array of `{ "prefix", "namespace" }` bindings added to the standard prefixes.
    #[arg(long)]
    registry: Option<PathBuf>,

    /// JSON object mapping prefixes or namespaces to colours.
    #[arg(long)]
    palette: Option<PathBuf>,

    /// Node to collapse; may be repeated.
    #[arg(long)]
    collapse: Vec<String>,

    /// Number of rarest relations kept visible on a collapsed node.
    #[arg(long, default_value_t = 3)]
    threshold: usize,

    /// Print only the hidden-flag changes instead of the whole diagram.
    #[arg(long)]
    changes_only: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

enum InputFormat {
    Rdf(DocumentFormat),
    Json,
}

fn input_format(args: &Args) -> Result<InputFormat> {
    let name = match &args.format {
        Some(name) => name.clone(),
        None => args
            .input
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_string)
            .with_context(|| {
                format!(
                    "Cannot infer the format of {}; pass --format",
                    args.input.display()
                )
            })?,
    };
    if name.eq_ignore_ascii_case("json") {
        return Ok(InputFormat::Json);
    }
    Ok(InputFormat::Rdf(name.parse()?))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

fn read_optional<T: DeserializeOwned + Default>(path: Option<&Path>) -> Result<T> {
    path.map_or_else(|| Ok(T::default()), read_json)
}

fn load_quads(args: &Args) -> Result<Vec<Quad>> {
    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let quads = match input_format(args)? {
        InputFormat::Json => {
            let raw: serde_json::Value = serde_json::from_str(&source)
                .with_context(|| format!("Failed to parse {}", args.input.display()))?;
            quads_from_json(&raw)
        }
        InputFormat::Rdf(format) => load_str(&source, format, args.graph.as_deref())
            .with_context(|| format!("Failed to load {}", args.input.display()))?,
    };
    Ok(quads)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize output")?;
    println!("{out}");
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let quads = load_quads(&args)?;
    let properties: Vec<SchemaEntry> = read_optional(args.properties.as_deref())?;
    let classes: Vec<SchemaEntry> = read_optional(args.classes.as_deref())?;
    let extra: PrefixRegistry = read_optional(args.registry.as_deref())?;
    let palette: Option<Palette> = args.palette.as_deref().map(read_json).transpose()?;

    let mut registry = PrefixRegistry::with_standard_prefixes();
    for entry in extra.entries() {
        registry.insert(entry.prefix.clone(), entry.namespace.clone());
    }

    let options = MapOptions {
        available_properties: &properties,
        available_classes: &classes,
        registry: Some(&registry),
        palette: palette.as_ref(),
        predicate_kind_override: None,
    };
    let mut diagram = map_quads_to_diagram(&quads, &options);
    tracing::info!(
        quads = quads.len(),
        nodes = diagram.nodes.len(),
        edges = diagram.edges.len(),
        "mapped {}",
        args.input.display()
    );

    let changes = visibility_changes(
        &diagram.nodes,
        &diagram.edges,
        args.collapse.as_slice(),
        args.threshold,
    );
    if args.changes_only {
        return print_json(&changes, args.pretty);
    }
    changes.apply(&mut diagram.nodes, &mut diagram.edges);
    print_json(&diagram, args.pretty)
}
