//! CLI tool for exporting a learner's collected prompts to Markdown.
//!
//! Reads the intake profile and a session snapshot saved by the browser
//! shell and writes the same learning pack the in-browser download
//! produces. Useful for regenerating a pack after the fact or wiring
//! the export into scripts.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use econai_core::{
    build_document, export_filename, IntakeProfile, PromptCollection, SlideNotes, SlideTitles,
};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Export collected prompts and notes as a personalized Markdown learning pack.
#[derive(Parser, Debug)]
#[command(name = "econai-export")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Learner intake profile JSON ({"name", "profession", "curiosity"})
    #[arg(short, long)]
    profile: PathBuf,

    /// Session snapshot JSON ({"collected": [...], "notes": {...}})
    #[arg(short, long)]
    session: Option<PathBuf>,

    /// Slide title catalog JSON (array of titles; default: the built-in deck)
    #[arg(short, long)]
    titles: Option<PathBuf>,

    /// Output directory (default: current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the document to stdout instead of writing a file
    #[arg(long)]
    print: bool,

    /// Date for the document header (YYYY-MM-DD, default: today)
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Session-scoped state as captured by the browser shell.
#[derive(Debug, Default, Deserialize)]
struct SessionSnapshot {
    #[serde(default)]
    collected: PromptCollection,
    #[serde(default)]
    notes: SlideNotes,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let profile = load_profile(&args.profile)?;

    let snapshot = match &args.session {
        Some(path) => load_session(path)?,
        None => SessionSnapshot::default(),
    };

    let titles = match &args.titles {
        Some(path) => load_titles(path)?,
        None => SlideTitles::default(),
    };

    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    if args.verbose {
        eprintln!(
            "  {} collected prompts, {} notes",
            snapshot.collected.len(),
            snapshot.notes.len()
        );
    }

    let document = build_document(&profile, &snapshot.collected, &snapshot.notes, &titles, date)?;

    if args.print {
        print!("{}", document);
    } else {
        let output_path = get_output_path(&profile, args.output.as_ref())?;
        write_output(&output_path, &document)?;
        if args.verbose {
            eprintln!("Written to: {}", output_path.display());
        }
    }

    Ok(())
}

/// Load the intake profile; its absence means intake was never run.
fn load_profile(path: &Path) -> Result<IntakeProfile> {
    let raw = fs::read_to_string(path).with_context(|| {
        format!(
            "No readable intake profile at {}; complete the intake form first",
            path.display()
        )
    })?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid intake profile JSON: {}", path.display()))
}

/// Load the session snapshot file.
fn load_session(path: &Path) -> Result<SessionSnapshot> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read session snapshot {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid session snapshot JSON: {}", path.display()))
}

/// Load a caller-supplied slide title catalog.
fn load_titles(path: &Path) -> Result<SlideTitles> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read title catalog {}", path.display()))?;
    SlideTitles::from_json(&raw)
        .with_context(|| format!("Invalid title catalog JSON: {}", path.display()))
}

/// Determine the output path for the learning pack.
fn get_output_path(profile: &IntakeProfile, output_dir: Option<&PathBuf>) -> Result<PathBuf> {
    let filename = export_filename(profile);

    let output_path = match output_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(filename)
        }
        None => PathBuf::from(filename),
    };

    Ok(output_path)
}

/// Write the document to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write to {}", path.display()))?;
    log::debug!("wrote {} bytes", content.len());
    Ok(())
}
