#![forbid(unsafe_code)]

mod cmd;

use std::env;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "nodescore: rank graph nodes by structural importance",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Score and rank the nodes of a JSON graph snapshot",
        after_help = "EXAMPLES:\n    # Score with the configured criteria\n    nodescore score graph.json\n\n    # Inbound edges only, reading stdin\n    cat graph.json | nodescore score --criteria inbound\n\n    # Clear scores and ranks\n    nodescore score graph.json --reset"
    )]
    Score(cmd::score::ScoreArgs),

    #[command(about = "List the available scoring criteria")]
    Criteria(cmd::criteria::CriteriaArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("NODESCORE_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "nodescore=debug,nodescore_core=debug,info"
        } else {
            "nodescore=info,nodescore_core=info,warn"
        })
    });

    let format = env::var("NODESCORE_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries the snapshot; logs go to stderr.
    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Commands::Score(args) => cmd::score::run_score(&args),
        Commands::Criteria(args) => cmd::criteria::run_criteria(&args),
    }
}
