//! Behaviors command - swappable flight and voice strategies.

use anyhow::Result;
use clap::Args;

use flocksim::Transcript;
use flocksim::behavior::{BehavioralDuck, FlyRocketPowered};

use crate::OutputFormat;

/// Arguments for the behaviors command.
#[derive(Args)]
pub struct BehaviorsArgs {
    /// Skip the mid-simulation rocket upgrade for the model duck
    #[arg(long)]
    pub no_upgrade: bool,
}

/// Execute the behaviors command.
pub fn execute(args: BehaviorsArgs, format: OutputFormat) -> Result<()> {
    let transcript = Transcript::new();

    let mallard = BehavioralDuck::mallard();
    mallard.display(&transcript);
    mallard.perform_quack(&transcript);
    mallard.perform_fly(&transcript);

    let mut model = BehavioralDuck::model();
    model.display(&transcript);
    model.perform_quack(&transcript);
    model.perform_fly(&transcript);

    if !args.no_upgrade {
        model.set_fly_behavior(Box::new(FlyRocketPowered));
        model.perform_fly(&transcript);
    }

    model.swim(&transcript);

    match format {
        OutputFormat::Human => println!("{}", transcript.to_text()),
        OutputFormat::Json | OutputFormat::JsonCompact => {
            let calls = transcript.calls();
            let json = if matches!(format, OutputFormat::JsonCompact) {
                serde_json::to_string(&calls)?
            } else {
                serde_json::to_string_pretty(&calls)?
            };
            println!("{}", json);
        }
    }

    Ok(())
}
