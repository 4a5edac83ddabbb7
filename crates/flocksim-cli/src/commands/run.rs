//! Run command - the compound pond simulation.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use flocksim::prelude::*;

use crate::OutputFormat;

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Scenario config file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the main-flock roster (repeatable, e.g. --duck mallard)
    #[arg(long = "duck")]
    pub ducks: Vec<String>,

    /// Override the nested mallard sub-flock size
    #[arg(long)]
    pub nested_mallards: Option<usize>,

    /// Leave the goose out of the flock
    #[arg(long)]
    pub no_goose: bool,

    /// Use the plain product line instead of counted ducks
    #[arg(long)]
    pub plain: bool,

    /// Skip registering the quackologist
    #[arg(long)]
    pub no_observer: bool,
}

/// Execute the run command.
pub fn execute(args: RunArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    // Build the scenario config
    let mut config = match &args.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("Failed to load scenario config from {}", path.display()))?,
        None => SimConfig::default(),
    };

    if !args.ducks.is_empty() {
        config.roster = args
            .ducks
            .iter()
            .map(|name| name.parse::<DuckKind>())
            .collect::<Result<Vec<_>, _>>()
            .context("Invalid --duck value")?;
    }
    if let Some(size) = args.nested_mallards {
        config.nested_mallards = size;
    }
    if args.no_goose {
        config.include_goose = false;
    }

    if !quiet {
        tracing::info!(
            roster = config.roster.len(),
            counting = !args.plain,
            "Running pond simulation"
        );
    }

    // Wire observers and run
    let quackologist = Arc::new(Quackologist::new());
    let mut simulator = Simulator::new();
    if !args.no_observer {
        simulator = simulator.with_observer(Arc::clone(&quackologist) as SharedObserver);
    }

    let (transcript, quack_total) = if args.plain {
        (simulator.run(&StandardDuckFactory::new(), &config), None)
    } else {
        let factory = CountingDuckFactory::with_fresh_counter();
        let counter = factory.counter();
        let transcript = simulator.run(&factory, &config);
        (transcript, Some(counter.total()))
    };

    // Build the report
    let mut report = SimulationReport::new(&transcript);
    if let Some(total) = quack_total {
        report = report.with_quack_total(total);
    }
    if !args.no_observer {
        report = report.with_sightings(quackologist.sightings());
    }

    // Output results
    match format {
        OutputFormat::Human => {
            print!("{}", report.to_text());
        }
        OutputFormat::Json | OutputFormat::JsonCompact => {
            let json = if matches!(format, OutputFormat::JsonCompact) {
                serde_json::to_string(&report.to_json())?
            } else {
                report.to_json_pretty()
            };
            println!("{}", json);
        }
    }

    Ok(())
}
