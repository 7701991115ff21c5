//! Dual Gateway CLI
//!
//! Drives one wizard end to end: fill the form, submit, wait out the
//! simulated latency and print the result.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;

use dual_gateway::advisor::{self, Persona};
use dual_gateway::crisis::{self, CrisisScenario};
use dual_gateway::projection::{
    CareerField, Country, EducationLevel, InvestmentGoal, Region, RiskProfile, WealthField,
};
use dual_gateway::{Currency, Engine, Gateway, Report, Resolution, SimulatorConfig};

#[derive(Debug, Parser)]
#[command(name = "dual_gateway", version, about = "Career and wealth simulation wizards")]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Currency selected before submitting
    #[arg(long, global = true)]
    currency: Option<Currency>,

    /// Currency to switch to once the result is shown
    #[arg(long, global = true)]
    switch_to: Option<Currency>,

    /// Print the report as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Write the projection series to this CSV file
    #[arg(long, global = true)]
    csv: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Education pathway and career ROI
    Career {
        #[arg(long, default_value = "Software Engineer")]
        goal: String,

        #[arg(long, value_enum, default_value_t = Country::Usa)]
        country: Country,

        #[arg(long, value_enum, default_value_t = EducationLevel::HighSchool)]
        education: EducationLevel,
    },

    /// Investment projection
    Wealth {
        #[arg(long, default_value = "1000000")]
        principal: String,

        /// Horizon in years (clamped to 1-30)
        #[arg(long, default_value_t = 10)]
        years: u32,

        #[arg(long, value_enum, default_value_t = RiskProfile::Balanced)]
        risk: RiskProfile,

        #[arg(long, value_enum, default_value_t = Region::GlobalDiversified)]
        region: Region,

        #[arg(long, value_enum, default_value_t = InvestmentGoal::Growth)]
        goal: InvestmentGoal,

        /// 0-100 risk score; overrides --risk and --goal
        #[arg(long)]
        risk_score: Option<u8>,
    },

    /// Instant outlook for a short horizon
    QuickCheck {
        #[arg(value_enum)]
        engine: Engine,

        years: u32,
    },

    /// Replay a historical crash against the portfolio
    CrisisReplay {
        #[arg(value_enum)]
        scenario: CrisisScenario,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SimulatorConfig::from_json_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SimulatorConfig::default(),
    };
    if let Some(currency) = cli.currency {
        config.default_currency = currency;
    }

    let mut gateway = Gateway::new(&config);

    let engine = match cli.command {
        Command::Career {
            goal,
            country,
            education,
        } => {
            gateway.update_career(CareerField::Goal(goal))?;
            gateway.update_career(CareerField::CountryOfInterest(country))?;
            gateway.update_career(CareerField::EducationLevel(education))?;
            Engine::Career
        }
        Command::Wealth {
            principal,
            years,
            risk,
            region,
            goal,
            risk_score,
        } => {
            gateway.update_wealth(WealthField::Principal(principal))?;
            gateway.update_wealth(WealthField::DurationYears(years))?;
            gateway.update_wealth(WealthField::Region(region))?;
            match risk_score {
                Some(score) => {
                    gateway.apply_risk_score(score)?;
                    let persona = Persona::for_score(score);
                    println!("Risk persona: {:?} - {}", persona, persona.description());
                }
                None => {
                    gateway.update_wealth(WealthField::RiskProfile(risk))?;
                    gateway.update_wealth(WealthField::Goal(goal))?;
                }
            }
            Engine::Wealth
        }
        Command::QuickCheck { engine, years } => {
            let check = advisor::quick_check(engine, years);
            println!("{}", check.question);
            println!("  {}", check.summary);
            println!("  {}", check.outlook);
            return Ok(());
        }
        Command::CrisisReplay { scenario } => {
            let replay = scenario.replay();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&replay)?);
                return Ok(());
            }
            println!("{}", replay.name);
            println!("  {}", replay.description);
            println!("\n  {:<8} {:>9} {:>9}", "Period", "Portfolio", "Market");
            for point in &replay.series {
                println!("  {:<8} {:>9.0} {:>9.0}", point.label, point.portfolio, point.market);
            }
            println!(
                "\n  Drawdown: portfolio -{:.0}%, market -{:.0}%",
                replay.portfolio_drawdown_pct, replay.market_drawdown_pct
            );
            println!("  {}", crisis::STRESS_WARNING);
            return Ok(());
        }
    };

    gateway.set_mode(engine);
    gateway.submit(engine)?;
    println!(
        "Simulating {} projection in {}...",
        engine,
        gateway.currency()
    );

    let completion = gateway
        .next_completion()
        .await
        .context("no simulation was pending")?;
    if let Resolution::Rejected(err) = completion.resolution {
        bail!("simulation rejected: {}", err);
    }

    if let Some(currency) = cli.switch_to {
        gateway.select_currency(currency)?;
        println!("Switched display currency to {}", currency);
    }

    let report = gateway
        .report(engine)
        .context("simulation finished without a result")?;

    if cli.json {
        println!("{}", report.to_json_pretty()?);
    } else {
        print_report(&report);
    }

    if let Some(path) = cli.csv {
        let file = File::create(&path)
            .with_context(|| format!("creating {}", path.display()))?;
        report.write_series_csv(file)?;
        println!("\nSeries written to: {}", path.display());
    }

    Ok(())
}

fn print_report(report: &Report) {
    println!("\n{} projection ({})", report.engine(), report.currency);
    println!("{}", "-".repeat(48));
    for (label, value) in report.headline() {
        println!("  {:<20} {}", label, value);
    }
}
