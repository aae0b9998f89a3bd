//! `raml-resolve`: load a document, apply its traits and resolve paths.
//!
//! ```bash
//! RUST_LOG=info raml-resolve api.yaml /v1/users http://api.example.com/v1/users/{id} --tree
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use raml_model::tracing::setup_tracing;
use raml_resolver::{load_path, render};
use std::path::PathBuf;
use tracing::info;

/// Resolve request paths against a RAML document
#[derive(Parser, Debug)]
#[command(name = "raml-resolve", version)]
#[command(about = "Resolve request paths against a RAML document", long_about = None)]
struct Args {
    /// Document to load
    file: PathBuf,

    /// Paths to resolve (absolute, host-relative or base-relative)
    paths: Vec<String>,

    /// Print the resource tree
    #[arg(long)]
    tree: bool,

    /// Skip trait application
    #[arg(long)]
    no_traits: bool,
}

fn main() -> Result<()> {
    setup_tracing();
    let args = Args::parse();

    let mut raml = load_path(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    if !args.no_traits {
        let report = raml
            .apply_traits()
            .with_context(|| format!("Failed to apply traits in {}", args.file.display()))?;
        info!(
            resources = report.resources_visited,
            merged = report.fragments_merged,
            "Ready"
        );
    }

    if args.tree {
        print!("{}", render::render_tree(&raml));
    }

    for path in &args.paths {
        let found = raml
            .resolve(path)
            .with_context(|| format!("Failed to resolve {path}"))?;
        println!("{}", render::render_resolution(path, found));
    }
    Ok(())
}
