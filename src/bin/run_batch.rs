//! Evaluate every parameter set in a CSV file
//!
//! Input columns: optional `scenario`, then the seven input keys
//! (`area_acres`, `mortality_percent`, ...). Output adds the eight metrics.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;
use sts_carbon::inputs::load_inputs;
use sts_carbon::report::write_batch_csv;
use sts_carbon::session::{evaluate_batch, InputPolicy};

#[derive(Parser, Debug)]
#[command(name = "run_batch", version)]
#[command(about = "Evaluate carbon benefits for every row of a CSV file")]
struct Args {
    /// CSV of parameter sets
    #[arg(short, long)]
    input: PathBuf,

    /// Where to write results
    #[arg(short, long, default_value = "carbon_benefits_output.csv")]
    output: PathBuf,

    /// Fail on out-of-range rows instead of clamping them
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let policy = if args.strict { InputPolicy::Strict } else { InputPolicy::Clamp };

    let start = Instant::now();
    let mut scenarios = load_inputs(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    println!("Loaded {} parameter sets in {:?}", scenarios.len(), start.elapsed());

    for scenario in &mut scenarios {
        scenario.inputs = policy
            .apply(&scenario.inputs)
            .with_context(|| format!("scenario '{}'", scenario.label))?;
    }

    let inputs: Vec<_> = scenarios.iter().map(|s| s.inputs).collect();
    let results = evaluate_batch(&inputs);

    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    write_batch_csv(BufWriter::new(file), &scenarios, &results)?;

    println!("Output written to {}", args.output.display());
    println!("Total time: {:?}", start.elapsed());

    Ok(())
}
