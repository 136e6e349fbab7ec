//! STS carbon benefits CLI
//!
//! Computes the carbon and social-cost benefits for one set of inputs, or runs
//! an interactive console that recomputes after every change.
//!
//! Each input can also be set through the environment:
//!   STS_AREA_ACRES, STS_MORTALITY_PERCENT, STS_CARBON_STOCK,
//!   STS_SEQUESTRATION_RATE, STS_SCC_LOW, STS_SCC_HIGH, STS_CAR_EMISSIONS

use anyhow::{Context, Result};
use clap::{Args, Parser};
use std::io::{self, BufRead, Write};
use sts_carbon::inputs::{InputField, InputParameters};
use sts_carbon::session::{CalculatorSession, Command, InputPolicy, HELP};

#[derive(Parser, Debug)]
#[command(name = "sts_carbon", version)]
#[command(about = "Forest carbon benefits of spongy moth management")]
#[command(allow_negative_numbers = true)]
struct Cli {
    #[command(flatten)]
    inputs: InputArgs,

    /// Reject out-of-range inputs instead of clamping them
    #[arg(long)]
    strict: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Start an interactive console seeded with the given inputs
    #[arg(short, long)]
    interactive: bool,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Area protected (acres)
    #[arg(long, env = "STS_AREA_ACRES", default_value_t = InputField::AreaAcres.bounds().default)]
    area_acres: f64,

    /// Defoliation-induced mortality avoided (%)
    #[arg(long, env = "STS_MORTALITY_PERCENT", default_value_t = InputField::MortalityPercent.bounds().default)]
    mortality_percent: f64,

    /// Aboveground carbon stock (t C / ha)
    #[arg(long, env = "STS_CARBON_STOCK", default_value_t = InputField::CarbonStock.bounds().default)]
    carbon_stock: f64,

    /// Annual net sequestration (t C / ha / yr)
    #[arg(long, env = "STS_SEQUESTRATION_RATE", default_value_t = InputField::SequestrationRate.bounds().default)]
    sequestration_rate: f64,

    /// Social cost of carbon, low ($ / t CO2)
    #[arg(long, env = "STS_SCC_LOW", default_value_t = InputField::SccLow.bounds().default)]
    scc_low: f64,

    /// Social cost of carbon, high ($ / t CO2)
    #[arg(long, env = "STS_SCC_HIGH", default_value_t = InputField::SccHigh.bounds().default)]
    scc_high: f64,

    /// Average car emissions (t CO2 / car / yr)
    #[arg(long, env = "STS_CAR_EMISSIONS", default_value_t = InputField::CarEmissions.bounds().default)]
    car_emissions: f64,
}

impl InputArgs {
    fn to_parameters(&self) -> InputParameters {
        InputParameters {
            area_acres: self.area_acres,
            mortality_percent: self.mortality_percent,
            carbon_stock_t_per_ha: self.carbon_stock,
            sequestration_rate_t_per_ha_yr: self.sequestration_rate,
            scc_low_usd_per_tco2: self.scc_low,
            scc_high_usd_per_tco2: self.scc_high,
            car_emissions_t_per_car_yr: self.car_emissions,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let policy = if cli.strict { InputPolicy::Strict } else { InputPolicy::Clamp };

    let mut session = CalculatorSession::from_inputs(cli.inputs.to_parameters(), policy)
        .context("invalid inputs")?;

    if cli.interactive {
        return run_console(&mut session);
    }

    let report = session.report();
    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.panel());
    }

    Ok(())
}

/// Read commands from stdin until `quit` or end of input
fn run_console(session: &mut CalculatorSession) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}\n", session.report().panel());
    println!("Type 'help' for commands.");

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("failed to read stdin")? == 0 {
            break;
        }

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("error: {}", e);
                continue;
            }
        };

        let outcome = match command {
            Command::Set(field, value) => session
                .apply_set(field, value)
                .map(|outcome| println!("  {}", outcome)),
            Command::Reset(Some(field)) => session.reset_field(field).map(|_| ()),
            Command::Reset(None) => {
                session.reset();
                Ok(())
            }
            Command::Show => {
                println!("{}", session.report().panel());
                continue;
            }
            Command::Json => {
                println!("{}", session.report().to_json()?);
                continue;
            }
            Command::Fields => {
                print_fields(session.inputs());
                continue;
            }
            Command::Help => {
                println!("{}", HELP);
                continue;
            }
            Command::Quit => break,
        };

        match outcome {
            Ok(()) => {
                let report = session.report();
                println!("  {}: {}", report.one_time.co2_label, report.one_time.co2);
                println!("  {}: {}", report.annual.co2_label, report.annual.co2);
                println!("  {}: {}", report.one_time.scc_label, report.one_time.scc_value);
                println!("  {}: {}", report.annual.scc_label, report.annual.scc_value);
            }
            Err(e) => eprintln!("error: {}", e),
        }
    }

    Ok(())
}

fn print_fields(current: &InputParameters) {
    println!("{:<32} {:>12} {:>10} {:>10} {:>8}", "Field", "Current", "Min", "Max", "Step");
    println!("{}", "-".repeat(76));
    for field in InputField::ALL {
        let b = field.bounds();
        let max = b.max.map(|m| format!("{}", m)).unwrap_or_else(|| "-".to_string());
        println!(
            "{:<32} {:>12} {:>10} {:>10} {:>8}",
            field.key(),
            current.get(field),
            b.min,
            max,
            b.step,
        );
    }
}
