//! Match Report CLI
//!
//! Reads a roster file plus one or more answer-log JSON documents and prints
//! the per-game match statistics and point totals.

mod report;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use mq_core::{build_match_report, player_names, read_song_log, resolve_teams, Roster, SongEntry};

#[derive(Parser)]
#[command(name = "mq_cli")]
#[command(about = "Build match reports from music-quiz answer logs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a match report from answer-log documents
    Report {
        /// Roster JSON file (player → team → seed mapping)
        #[arg(long)]
        roster: PathBuf,

        /// Answer-log JSON file; repeat for multi-document matches
        #[arg(long, required = true)]
        log: Vec<PathBuf>,

        /// Print the report as JSON instead of text
        #[arg(long, default_value = "false")]
        json: bool,

        /// Bracket label for the report header
        #[arg(long)]
        bracket: Option<String>,
    },
}

/// Read every log document, keeping the ones that parse. Each failure is
/// reported on its own; a bad file never takes the others down with it.
fn load_documents(paths: &[PathBuf]) -> (Vec<Vec<SongEntry>>, Vec<String>) {
    let mut documents = Vec::new();
    let mut alerts = Vec::new();
    for path in paths {
        match read_song_log(path) {
            Ok(songs) => documents.push(songs),
            Err(err) => alerts.push(format!("Bad file ({}): {err}", path.display())),
        }
    }
    (documents, alerts)
}

fn run_report(roster: &Path, logs: &[PathBuf], json: bool, bracket: Option<&str>) -> Result<String> {
    let roster = Roster::load(roster)
        .with_context(|| format!("failed to load roster {}", roster.display()))?;

    let (documents, alerts) = load_documents(logs);
    for alert in &alerts {
        eprintln!("warning: {alert}");
    }
    if documents.is_empty() {
        bail!("no readable log documents");
    }

    let names = player_names(&documents[0]);
    let resolved = resolve_teams(&names, &roster);
    for error in &resolved.errors {
        eprintln!("warning: {error}");
    }

    let match_report = build_match_report(&documents, &resolved.teams)?;

    if json {
        Ok(serde_json::to_string_pretty(&match_report)?)
    } else {
        Ok(report::render_report(&match_report, bracket))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report { roster, log, json, bracket } => {
            let output = run_report(&roster, &log, json, bracket.as_deref())?;
            println!("{output}");
        }
    }
    Ok(())
}
