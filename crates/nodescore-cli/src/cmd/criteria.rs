//! `nodescore criteria` — list the known scoring criteria.

use std::io::Write;

use clap::Args;
use nodescore_core::Criterion;

/// Arguments for `nodescore criteria`.
#[derive(Args, Debug, Default)]
pub struct CriteriaArgs {
    /// Emit a JSON array instead of one name per line.
    #[arg(long)]
    pub json: bool,
}

fn description(criterion: Criterion) -> &'static str {
    match criterion {
        Criterion::InboundEdges => "share of all edges that target the node",
        Criterion::OutboundEdges => "share of all edges that originate at the node",
    }
}

/// Execute `nodescore criteria`.
pub fn run_criteria(args: &CriteriaArgs) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.json {
        serde_json::to_writer(&mut out, &Criterion::ALL)?;
        writeln!(out)?;
        return Ok(());
    }

    for criterion in Criterion::ALL {
        writeln!(out, "{criterion:<14} {}", description(criterion))?;
    }
    Ok(())
}
