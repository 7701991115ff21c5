//! Run the default form of one engine in every supported currency
//!
//! Outputs one row per currency with the headline figures, raw and formatted

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use dual_gateway::projection::{CareerGenerator, CareerInput, WealthGenerator, WealthInput};
use dual_gateway::{CurrencySweep, Engine};

#[derive(Debug, Parser)]
#[command(name = "currency_sweep", about = "Headline figures across all currencies")]
struct Args {
    #[arg(long, value_enum, default_value_t = Engine::Wealth)]
    engine: Engine,

    #[arg(long, default_value = "currency_sweep.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Sweeping {} projection across currencies...", args.engine);

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let mut out = csv::Writer::from_writer(file);

    let rows = match args.engine {
        Engine::Career => {
            out.write_record(["Code", "Symbol", "Rate", "Cost", "Income", "CostDisplay"])?;
            let results = CurrencySweep::new(CareerGenerator).run_all(&CareerInput::default())?;
            for (currency, result) in &results {
                out.write_record([
                    currency.code().to_string(),
                    currency.symbol().to_string(),
                    currency.rate_to_base().to_string(),
                    format!("{:.2}", result.projected_cost.amount),
                    format!("{:.2}", result.projected_annual_income.amount),
                    result.projected_cost.to_string(),
                ])?;
            }
            results.len()
        }
        Engine::Wealth => {
            out.write_record(["Code", "Symbol", "Rate", "BestCase", "WorstCase", "BestCaseDisplay"])?;
            let results = CurrencySweep::new(WealthGenerator).run_all(&WealthInput::default())?;
            for (currency, result) in &results {
                out.write_record([
                    currency.code().to_string(),
                    currency.symbol().to_string(),
                    currency.rate_to_base().to_string(),
                    format!("{:.2}", result.best_case.amount),
                    format!("{:.2}", result.worst_case.amount),
                    result.best_case.to_string(),
                ])?;
            }
            results.len()
        }
    };
    out.flush()?;

    println!("{} currencies written to {}", rows, args.output.display());
    println!("Total time: {:?}", start.elapsed());
    Ok(())
}
