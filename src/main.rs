//! Savings Planner CLI
//!
//! Command-line interface for retirement plans, ETF projections and strategy comparison

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use savings_planner::projection::write_trajectory_csv;
use savings_planner::strategy::{load_strategies, DEFAULT_STRATEGIES_PATH};
use savings_planner::{
    plan_retirement, project, EtfParameters, RetirementParameters, StrategySet,
};

#[derive(Debug, Parser)]
#[command(name = "savings-planner", version, about = "Retirement and ETF projection calculator")]
struct Cli {
    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Total retirement need and the monthly savings to fund it
    Retirement(RetirementArgs),
    /// Project a lump sum plus monthly contributions
    Etf(EtfArgs),
    /// Project and compare strategies from a preset file
    Compare(CompareArgs),
}

#[derive(Debug, Args)]
struct RetirementArgs {
    #[arg(long)]
    current_age: i32,
    #[arg(long)]
    retirement_age: i32,
    #[arg(long)]
    life_expectancy: i32,
    /// Monthly living expense in today's money
    #[arg(long)]
    monthly_expense: f64,
    #[arg(long)]
    current_savings: f64,
    /// Annual return as a decimal (0.07 = 7%)
    #[arg(long, allow_negative_numbers = true)]
    annual_return: f64,
    /// Annual inflation as a decimal (0.02 = 2%)
    #[arg(long, allow_negative_numbers = true)]
    inflation_rate: f64,
}

impl From<RetirementArgs> for RetirementParameters {
    fn from(args: RetirementArgs) -> Self {
        Self {
            current_age: args.current_age,
            retirement_age: args.retirement_age,
            life_expectancy: args.life_expectancy,
            monthly_expense: args.monthly_expense,
            current_savings: args.current_savings,
            annual_return: args.annual_return,
            inflation_rate: args.inflation_rate,
        }
    }
}

#[derive(Debug, Args)]
struct EtfArgs {
    #[arg(long)]
    initial_investment: f64,
    #[arg(long, allow_negative_numbers = true)]
    monthly_contribution: f64,
    /// Gross annual return as a decimal (0.08 = 8%)
    #[arg(long, allow_negative_numbers = true)]
    annual_return_rate: f64,
    /// Annual expense ratio as a decimal (0.0025 = 0.25%)
    #[arg(long, default_value_t = 0.0)]
    expense_ratio: f64,
    #[arg(long)]
    years: u32,
    /// Also write the yearly trajectory to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

impl EtfArgs {
    fn parameters(&self) -> EtfParameters {
        EtfParameters {
            initial_investment: self.initial_investment,
            monthly_contribution: self.monthly_contribution,
            annual_return_rate: self.annual_return_rate,
            expense_ratio: self.expense_ratio,
            years: self.years,
        }
    }
}

#[derive(Debug, Args)]
struct CompareArgs {
    /// Strategy preset file (.csv or .json)
    #[arg(long, env = "SAVINGS_PLANNER_STRATEGIES", default_value = DEFAULT_STRATEGIES_PATH)]
    strategies: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Retirement(args) => run_retirement(args, cli.json),
        Command::Etf(args) => run_etf(args, cli.json),
        Command::Compare(args) => run_compare(args, cli.json),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_retirement(args: RetirementArgs, json: bool) -> Result<()> {
    let params = RetirementParameters::from(args);
    let result = plan_retirement(&params).context("retirement plan failed")?;

    if json {
        return print_json(&result);
    }

    println!("Retirement Plan");
    println!("===============");
    println!("  Years until retirement: {}", result.years_until_retirement);
    println!("  Retirement duration:    {}", result.retirement_duration);
    println!("  Total needs:            {:.2}", result.total_needs);
    println!("  Monthly savings:        {:.2}", result.monthly_savings);
    Ok(())
}

fn run_etf(args: EtfArgs, json: bool) -> Result<()> {
    let result = project(&args.parameters());

    if let Some(path) = &args.csv {
        let file = File::create(path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        write_trajectory_csv(file, &result.yearly_trajectory)
            .with_context(|| format!("unable to write {}", path.display()))?;
        log::info!("trajectory written to {}", path.display());
    }

    if json {
        return print_json(&result);
    }

    println!("ETF Projection ({} years)", args.years);
    println!("{:>5} {:>16} {:>16} {:>16}", "Year", "Value", "Contributions", "Gain");
    println!("{}", "-".repeat(56));
    for point in &result.yearly_trajectory {
        println!(
            "{:>5} {:>16.2} {:>16.2} {:>16.2}",
            point.year, point.value, point.contributions, point.gain
        );
    }

    println!("\nSummary:");
    println!("  Final value:         {:.2}", result.final_value);
    println!("  Total contributions: {:.2}", result.total_contributions);
    println!("  Total gain:          {:.2}", result.total_gain);
    Ok(())
}

fn run_compare(args: CompareArgs, json: bool) -> Result<()> {
    let strategies = load_strategies(&args.strategies)
        .with_context(|| format!("unable to load strategies from {}", args.strategies.display()))?;

    let mut set = StrategySet::new(strategies);
    set.project_all();
    let entries = set.compare().context("strategy comparison failed")?;

    if json {
        return print_json(&entries);
    }

    println!("{:<24} {:>18} {:>10}", "Strategy", "Final value", "Growth %");
    println!("{}", "-".repeat(54));
    for entry in &entries {
        println!(
            "{:<24} {:>18.2} {:>10.2}",
            entry.name, entry.final_value, entry.growth_percentage
        );
    }
    Ok(())
}
