//! `nodescore score` — annotate a graph snapshot with scores and ranks.
//!
//! Reads a snapshot (`{"nodes": [...], "edges": [...]}`) from a file or
//! stdin and writes the same document back with `score` and `rank` set on
//! each node. Criteria come from `--criteria`, else from the config file.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use nodescore_core::{
    Criterion, ScoringConfig, Snapshot, load_config, reset_scores, score_nodes_with,
};
use tracing::{debug, instrument};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "nodescore.toml";

/// Arguments for `nodescore score`.
#[derive(Args, Debug, Default)]
pub struct ScoreArgs {
    /// Snapshot JSON file. Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Criterion to apply (repeatable or comma-separated). Overrides the config.
    #[arg(short, long, value_delimiter = ',')]
    pub criteria: Vec<Criterion>,

    /// Clear all scores and ranks instead of computing them.
    #[arg(long, conflicts_with = "criteria")]
    pub reset: bool,

    /// Path to a TOML config file (default: ./nodescore.toml if present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Pretty-print the output JSON.
    #[arg(long)]
    pub pretty: bool,
}

/// Execute `nodescore score`.
#[instrument(skip(args))]
pub fn run_score(args: &ScoreArgs) -> Result<()> {
    let config = resolve_config(args.config.as_deref())?;
    let snapshot = read_snapshot(args.input.as_deref())?;

    let scored = if args.reset {
        reset_scores(&snapshot)
    } else {
        let criteria = resolve_criteria(&args.criteria, &config);
        debug!(?criteria, rank_ceiling = config.rank_ceiling, "scoring snapshot");
        score_nodes_with(&snapshot, &criteria, &config)
    };

    write_snapshot(&scored, args.pretty)
}

fn resolve_config(explicit: Option<&Path>) -> Result<ScoringConfig> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("config file not found: {}", path.display());
            }
            load_config(path)
        }
        None => load_config(Path::new(DEFAULT_CONFIG_FILE)),
    }
}

fn resolve_criteria(cli: &[Criterion], config: &ScoringConfig) -> Vec<Criterion> {
    if cli.is_empty() {
        config.criteria.clone()
    } else {
        cli.to_vec()
    }
}

fn read_snapshot(input: Option<&Path>) -> Result<Snapshot> {
    let content = match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read snapshot from stdin")?;
            buf
        }
    };

    serde_json::from_str(&content).context("Failed to parse graph snapshot JSON")
}

fn write_snapshot(snapshot: &Snapshot, pretty: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, snapshot)?;
    } else {
        serde_json::to_writer(&mut out, snapshot)?;
    }
    writeln!(out)?;
    Ok(())
}
