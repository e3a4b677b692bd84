//! mdsplit: split a large markdown document into cross-linked files.
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mdsplit::{config::Config, prompts, Split};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One line per file and finding
    Text,
    /// A single JSON object with the summary, files and both reports
    Json,
}

#[derive(Parser)]
#[command(name = "mdsplit")]
#[command(about = "Split a markdown document into one file per ## section", long_about = None)]
struct Args {
    /// Markdown document to split
    #[arg(value_name = "FILE")]
    source: PathBuf,

    /// Directory for the generated files (defaults to the source's directory)
    #[arg(long, short = 'o', value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Run the whole pipeline and report, but write nothing
    #[arg(long)]
    dry_run: bool,

    /// Log section detection and rendering details
    #[arg(long)]
    debug: bool,

    /// Configuration file to use instead of mdsplit.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// How to print the reports
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.debug);

    let cfg = Config::load(args.config.as_deref())?;
    let text = fs::read_to_string(&args.source)
        .with_context(|| format!("failed to read {}", args.source.display()))?;
    let run = mdsplit::split(&text, &cfg)
        .with_context(|| format!("cannot split {}", args.source.display()))?;

    let out_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.source));
    if args.dry_run {
        info!(dir = %out_dir.display(), "dry run, nothing written");
    } else {
        write_outputs(&run, &out_dir, &cfg)?;
    }

    match args.format {
        Format::Text => print_text(&run, &out_dir, args.dry_run),
        Format::Json => print_json(&run)?,
    }
    Ok(())
}

fn init_tracing(debug: bool) {
    let fallback = if debug { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn default_output_dir(source: &Path) -> PathBuf {
    match source.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn write_outputs(run: &Split, dir: &Path, cfg: &Config) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    for unit in &run.units {
        let path = dir.join(&unit.filename);
        fs::write(&path, &unit.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    if cfg.write_prompts {
        let path = dir.join(&cfg.prompts_file);
        fs::write(&path, prompts::render(run))
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    info!(dir = %dir.display(), files = run.units.len(), "wrote output");
    Ok(())
}

fn print_text(run: &Split, dir: &Path, dry_run: bool) {
    let verb = if dry_run { "Would write" } else { "Wrote" };
    println!("{verb} {} files to {}:", run.units.len(), dir.display());
    for unit in &run.units {
        println!("  {}", unit.filename);
    }
    let summary = run.summary();
    println!(
        "Sections: {}, broken links: {}/{}",
        summary.sections, summary.broken_links, run.links.checked
    );
    print!("{}", run.quality);
    print!("{}", run.links);
}

fn print_json(run: &Split) -> Result<()> {
    let report = serde_json::json!({
        "summary": run.summary(),
        "files": run.units,
        "quality": run.quality,
        "links": run.links,
    });
    let json = serde_json::to_string_pretty(&report).context("failed to serialise report")?;
    println!("{json}");
    Ok(())
}
