//! Wealth Projection CLI
//!
//! Command-line interface for running the calculators and the portfolio
//! dashboard arithmetic

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use wealth_projection::format::{format_lakhs, format_percent};
use wealth_projection::params::{
    loader, FreedomParams, GoalParams, InflationParams, LumpsumParams, SipParams,
    TransferParams, WithdrawalParams,
};
use wealth_projection::portfolio::{compare_allocation, recommended_allocation, DEFAULT_AGE};
use wealth_projection::projection::{GrowthSnapshot, SipProjection, WithdrawalProjection};
use wealth_projection::{
    CalculatorOutput, CalculatorRequest, EngineConfig, RiskProfile, ScenarioRunner,
};

#[derive(Parser)]
#[command(name = "wealth_projection")]
#[command(about = "SIP, STP, SWP, lumpsum, inflation and financial-freedom calculators", long_about = None)]
struct Cli {
    /// Engine configuration (JSON); defaults to config/engine.json when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the full result as JSON instead of a summary
    #[arg(long, global = true)]
    json: bool,

    /// Write the yearly series (SIP, SWP) to this CSV file
    #[arg(long, global = true)]
    csv: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Smart SIP optimizer: flat vs annual step-up
    Sip {
        /// Monthly SIP
        #[arg(long)]
        sip: Option<f64>,
        /// Expected return (% p.a.)
        #[arg(long)]
        ret: Option<f64>,
        /// Tenure (years)
        #[arg(long)]
        yrs: Option<u32>,
        /// Annual step-up (%)
        #[arg(long)]
        step: Option<f64>,
    },
    /// Monthly SIP required to reach a goal
    Goal {
        #[arg(long)]
        goal: Option<f64>,
        #[arg(long)]
        ret: Option<f64>,
        #[arg(long)]
        yrs: Option<u32>,
    },
    /// Lumpsum future value
    Lumpsum {
        #[arg(long)]
        principal: Option<f64>,
        #[arg(long)]
        ret: Option<f64>,
        #[arg(long)]
        yrs: Option<u32>,
    },
    /// Inflation impact and real return
    Inflation {
        /// Nominal return (% p.a.)
        #[arg(long)]
        ret: Option<f64>,
        /// Inflation (% p.a.)
        #[arg(long)]
        infl: Option<f64>,
        #[arg(long)]
        yrs: Option<u32>,
        #[arg(long)]
        principal: Option<f64>,
    },
    /// Systematic transfer plan from debt into equity
    Stp {
        #[arg(long)]
        source: Option<f64>,
        #[arg(long)]
        transfer: Option<f64>,
        #[arg(long)]
        months: Option<u32>,
        /// Debt return (% p.a.)
        #[arg(long)]
        rd: Option<f64>,
        /// Equity return (% p.a.)
        #[arg(long)]
        re: Option<f64>,
    },
    /// Systematic withdrawal plan
    Swp {
        #[arg(long)]
        corpus: Option<f64>,
        #[arg(long)]
        withdrawal: Option<f64>,
        #[arg(long)]
        ret: Option<f64>,
        #[arg(long)]
        yrs: Option<u32>,
    },
    /// Financial Freedom Index and years to independence
    Ffi {
        /// Monthly expenses
        #[arg(long)]
        expense: Option<f64>,
        /// Monthly passive income
        #[arg(long)]
        passive: Option<f64>,
        #[arg(long)]
        corpus: Option<f64>,
        #[arg(long)]
        ret: Option<f64>,
        #[arg(long)]
        infl: Option<f64>,
    },
    /// Recommended asset allocation for an age and risk profile
    Allocation {
        #[arg(long, default_value_t = DEFAULT_AGE)]
        age: u32,
        #[arg(long, default_value = "Balanced")]
        profile: String,
    },
    /// Totals, net worth and allocation from a financial-data JSON document
    Portfolio {
        /// Financial-data document
        path: PathBuf,
        #[arg(long, default_value_t = DEFAULT_AGE)]
        age: u32,
        #[arg(long, default_value = "Balanced")]
        profile: String,
    },
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(p) => EngineConfig::from_json_path(p)
            .with_context(|| format!("loading config {}", p.display())),
        None if Path::new(loader::DEFAULT_CONFIG_PATH).exists() => {
            EngineConfig::from_json().context("loading default config")
        }
        None => Ok(EngineConfig::default()),
    }
}

fn build_request(command: &Commands) -> Option<CalculatorRequest> {
    let request = match *command {
        Commands::Sip { sip, ret, yrs, step } => {
            let d = SipParams::default();
            CalculatorRequest::SmartSipOptimizer(SipParams {
                monthly_sip: sip.unwrap_or(d.monthly_sip),
                annual_return: ret.unwrap_or(d.annual_return),
                years: yrs.unwrap_or(d.years),
                step_up: step.unwrap_or(d.step_up),
            })
        }
        Commands::Goal { goal, ret, yrs } => {
            let d = GoalParams::default();
            CalculatorRequest::GoalBasedSipPlanner(GoalParams {
                goal: goal.unwrap_or(d.goal),
                annual_return: ret.unwrap_or(d.annual_return),
                years: yrs.unwrap_or(d.years),
            })
        }
        Commands::Lumpsum { principal, ret, yrs } => {
            let d = LumpsumParams::default();
            CalculatorRequest::Lumpsum(LumpsumParams {
                principal: principal.unwrap_or(d.principal),
                annual_return: ret.unwrap_or(d.annual_return),
                years: yrs.unwrap_or(d.years),
            })
        }
        Commands::Inflation { ret, infl, yrs, principal } => {
            let d = InflationParams::default();
            CalculatorRequest::InflationReal(InflationParams {
                nominal_return: ret.unwrap_or(d.nominal_return),
                inflation: infl.unwrap_or(d.inflation),
                years: yrs.unwrap_or(d.years),
                principal: principal.unwrap_or(d.principal),
            })
        }
        Commands::Stp { source, transfer, months, rd, re } => {
            let d = TransferParams::default();
            CalculatorRequest::SystematicTransferPlan(TransferParams {
                source: source.unwrap_or(d.source),
                transfer: transfer.unwrap_or(d.transfer),
                months: months.unwrap_or(d.months),
                debt_return: rd.unwrap_or(d.debt_return),
                equity_return: re.unwrap_or(d.equity_return),
            })
        }
        Commands::Swp { corpus, withdrawal, ret, yrs } => {
            let d = WithdrawalParams::default();
            CalculatorRequest::SystematicWithdrawalPlan(WithdrawalParams {
                corpus: corpus.unwrap_or(d.corpus),
                withdrawal: withdrawal.unwrap_or(d.withdrawal),
                annual_return: ret.unwrap_or(d.annual_return),
                years: yrs.unwrap_or(d.years),
            })
        }
        Commands::Ffi { expense, passive, corpus, ret, infl } => {
            let d = FreedomParams::default();
            CalculatorRequest::FinancialFreedomIndex(FreedomParams {
                monthly_expense: expense.unwrap_or(d.monthly_expense),
                monthly_passive_income: passive.unwrap_or(d.monthly_passive_income),
                corpus: corpus.unwrap_or(d.corpus),
                annual_return: ret.unwrap_or(d.annual_return),
                inflation: infl.unwrap_or(d.inflation),
            })
        }
        Commands::Allocation { .. } | Commands::Portfolio { .. } => return None,
    };
    Some(request)
}

/// One row of the SIP series CSV
#[derive(Serialize)]
struct SipSeriesRow<'a> {
    series: &'a str,
    year: u32,
    invested: f64,
    fv: f64,
}

fn write_sip_csv(path: &Path, result: &SipProjection) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    let flat = result.flat_series.iter().map(|s| ("flat", s));
    let step = result.step_series.iter().map(|s| ("step-up", s));
    for (series, snapshot) in flat.chain(step) {
        let GrowthSnapshot { year, invested, fv } = *snapshot;
        writer.serialize(SipSeriesRow {
            series,
            year,
            invested,
            fv,
        })?;
    }
    writer.flush()?;
    Ok(())
}

fn write_swp_csv(path: &Path, result: &WithdrawalProjection) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for snapshot in &result.series {
        writer.serialize(snapshot)?;
    }
    writer.flush()?;
    Ok(())
}

fn print_summary(request: &CalculatorRequest, output: &CalculatorOutput) {
    let calculator = request.calculator();
    println!("{}", calculator.title());
    println!("{}\n", "=".repeat(calculator.title().len()));

    for (label, value) in output.headline() {
        let shown = match label {
            "Financial Freedom Index" | "Real Return (p.a.)" => format_percent(value),
            "Years to Independence" | "Depleted At Month" => format!("{}", value),
            _ => format_lakhs(value),
        };
        println!("  {:<34} {:>16}", label, shown);
    }

    match output {
        CalculatorOutput::SmartSipOptimizer(r) => {
            println!("\n{:>4} {:>16} {:>16} {:>16} {:>16}", "Year", "Invested", "Flat FV", "Step Invested", "Step FV");
            println!("{}", "-".repeat(72));
            for (flat, step) in r.flat_series.iter().zip(&r.step_series) {
                println!(
                    "{:>4} {:>16} {:>16} {:>16} {:>16}",
                    flat.year,
                    format_lakhs(flat.invested),
                    format_lakhs(flat.fv),
                    format_lakhs(step.invested),
                    format_lakhs(step.fv),
                );
            }
        }
        CalculatorOutput::SystematicWithdrawalPlan(r) => {
            println!("\n{:>4} {:>5} {:>16} {:>16} {:>16}", "Year", "Month", "Balance", "Withdrawn", "Interest");
            println!("{}", "-".repeat(61));
            for s in &r.series {
                println!(
                    "{:>4} {:>5} {:>16} {:>16} {:>16}",
                    s.year,
                    s.month,
                    format_lakhs(s.balance),
                    format_lakhs(s.total_withdrawn),
                    format_lakhs(s.total_interest),
                );
            }
            if let Some(month) = r.depleted_at {
                println!("\nCorpus runs out in month {}", month);
            }
        }
        CalculatorOutput::FinancialFreedomIndex(r) => {
            println!("\nStatus: {}", r.status);
        }
        _ => {}
    }
}

fn run_portfolio(path: &Path, age: u32, profile: RiskProfile, as_json: bool) -> Result<()> {
    let data = loader::load_financial_data(path)
        .with_context(|| format!("loading financial data {}", path.display()))?;
    let summary = data.summary();
    let recommended = recommended_allocation(age, profile);

    if as_json {
        let comparison = summary
            .current_allocation
            .map(|current| compare_allocation(&current, &recommended));
        let body = serde_json::json!({
            "summary": summary,
            "recommended": recommended,
            "comparison": comparison,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("Portfolio Summary");
    println!("=================\n");
    println!("  {:<20} {:>16}", "Equity", format_lakhs(summary.total_equity));
    println!("  {:<20} {:>16}", "Debt", format_lakhs(summary.total_debt));
    println!("  {:<20} {:>16}", "Insurance", format_lakhs(summary.total_insurance));
    println!("  {:<20} {:>16}", "Other", format_lakhs(summary.total_other));
    println!("  {:<20} {:>16}", "Liabilities", format_lakhs(summary.total_liabilities));
    println!("  {:<20} {:>16}", "Total Assets", format_lakhs(summary.total_assets));
    println!("  {:<20} {:>16}", "Net Worth", format_lakhs(summary.net_worth));

    match summary.current_allocation {
        Some(current) => {
            println!("\nAllocation vs recommended ({}, age {}):", profile, age);
            for row in compare_allocation(&current, &recommended) {
                println!(
                    "  {:<8} {:>8} {:>8}",
                    row.category,
                    format_percent(row.current),
                    format_percent(row.recommended)
                );
            }
        }
        None => println!("\nNo investments recorded; allocation unavailable"),
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Allocation { age, profile } => {
            let profile: RiskProfile = profile.parse()?;
            let allocation = recommended_allocation(*age, profile);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&allocation)?);
            } else {
                println!("Recommended allocation ({}, age {}):", profile, age);
                println!("  Equity {}", format_percent(allocation.equity));
                println!("  Debt   {}", format_percent(allocation.debt));
                println!("  Other  {}", format_percent(allocation.other));
            }
            return Ok(());
        }
        Commands::Portfolio { path, age, profile } => {
            return run_portfolio(path, *age, profile.parse()?, cli.json);
        }
        _ => {}
    }

    let Some(request) = build_request(&cli.command) else {
        return Ok(());
    };

    let runner = ScenarioRunner::with_config(load_config(cli.config.as_deref())?);
    let output = runner.run(&request)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_summary(&request, &output);
    }

    if let Some(path) = &cli.csv {
        match &output {
            CalculatorOutput::SmartSipOptimizer(r) => write_sip_csv(path, r)?,
            CalculatorOutput::SystematicWithdrawalPlan(r) => write_swp_csv(path, r)?,
            _ => anyhow::bail!("{} has no yearly series to write", request.calculator().title()),
        }
        if !cli.json {
            println!("\nSeries written to: {}", path.display());
        }
    }

    Ok(())
}
