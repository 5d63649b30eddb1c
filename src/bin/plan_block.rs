//! Batch affordability analysis over a persons CSV
//!
//! Evaluates every person against one property in parallel and writes
//! per-person outcomes plus aggregate statistics.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, Result};
use clap::Parser;
use rayon::prelude::*;

use smartvesting::person::load_persons;
use smartvesting::planner::{AffordabilityPlanner, HouseStrategy};
use smartvesting::{Person, Rates};

#[derive(Parser, Debug)]
#[command(name = "plan_block", about = "Batch home-affordability analysis")]
struct Args {
    /// CSV of person records (Name,Age,GrossSalary,BonusRate,Savings)
    #[arg(long, default_value = "persons.csv")]
    persons: PathBuf,

    /// Price of the property everyone is evaluated against
    #[arg(long, default_value_t = 2_000_000.0)]
    property_price: f64,

    /// Monthly rent paid while saving
    #[arg(long, default_value_t = 15_000.0)]
    rent: f64,

    /// Load rate tables from data/rates/ instead of the built-in values
    #[arg(long)]
    rates_from_csv: bool,

    /// Write per-person outcomes to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,
}

/// Outcome of analyzing one person
#[derive(Debug, Clone)]
struct PersonOutcome {
    name: String,
    age: u8,
    stable: bool,
    mortgage_years: Option<u32>,
    cash_years: Option<u32>,
    error: Option<String>,
}

fn analyze(person: &Person, rates: &Rates, property_price: f64, rent: f64) -> PersonOutcome {
    let planner = match AffordabilityPlanner::new(person.clone(), rates.clone()) {
        Ok(planner) => planner,
        Err(e) => {
            log::warn!("skipping {}: {}", person.name, e);
            return PersonOutcome {
                name: person.name.clone(),
                age: person.age,
                stable: false,
                mortgage_years: None,
                cash_years: None,
                error: Some(e.to_string()),
            };
        }
    };

    let mut outcome = PersonOutcome {
        name: person.name.clone(),
        age: person.age,
        stable: planner.is_financially_stable(),
        mortgage_years: None,
        cash_years: None,
        error: None,
    };

    for strategy in HouseStrategy::ALL {
        match planner.project_timeline(rent, property_price, strategy) {
            Ok(timeline) => match strategy {
                HouseStrategy::Mortgage => outcome.mortgage_years = Some(timeline.years_to_save),
                HouseStrategy::Cash => outcome.cash_years = Some(timeline.years_to_save),
            },
            Err(e) => {
                log::warn!("{} strategy failed for {}: {}", strategy, person.name, e);
                outcome.error = Some(e.to_string());
            }
        }
    }

    outcome
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    println!("Loading persons from {}...", args.persons.display());
    let persons =
        load_persons(&args.persons).map_err(|e| anyhow!("failed to load persons: {e}"))?;
    println!("Loaded {} persons in {:?}", persons.len(), start.elapsed());

    let rates = if args.rates_from_csv {
        Rates::from_csv().map_err(|e| anyhow!("failed to load rates: {e}"))?
    } else {
        Rates::default_czech_2023()
    };

    let analysis_start = Instant::now();
    let outcomes: Vec<PersonOutcome> = persons
        .par_iter()
        .map(|person| analyze(person, &rates, args.property_price, args.rent))
        .collect();
    println!(
        "Analyzed {} persons in {:?}",
        outcomes.len(),
        analysis_start.elapsed()
    );

    let stable = outcomes.iter().filter(|o| o.stable).count();
    let failed = outcomes.iter().filter(|o| o.error.is_some()).count();
    let mortgage_years: Vec<u32> = outcomes.iter().filter_map(|o| o.mortgage_years).collect();
    let cash_years: Vec<u32> = outcomes.iter().filter_map(|o| o.cash_years).collect();

    println!();
    println!(
        "Financially stable: {}/{} ({} with errors)",
        stable,
        outcomes.len(),
        failed
    );
    if !mortgage_years.is_empty() {
        println!(
            "Mortgage: avg {:.1} years to save (min {}, max {})",
            mortgage_years.iter().sum::<u32>() as f64 / mortgage_years.len() as f64,
            mortgage_years.iter().min().unwrap(),
            mortgage_years.iter().max().unwrap()
        );
    }
    if !cash_years.is_empty() {
        println!(
            "Cash: avg {:.1} years to save (min {}, max {})",
            cash_years.iter().sum::<u32>() as f64 / cash_years.len() as f64,
            cash_years.iter().min().unwrap(),
            cash_years.iter().max().unwrap()
        );
    }

    if let Some(path) = &args.output {
        let mut file = File::create(path)?;
        writeln!(file, "Name,Age,Stable,MortgageYears,CashYears,Error")?;
        for o in &outcomes {
            writeln!(
                file,
                "{},{},{},{},{},{}",
                o.name,
                o.age,
                o.stable,
                o.mortgage_years.map_or(String::new(), |y| y.to_string()),
                o.cash_years.map_or(String::new(), |y| y.to_string()),
                o.error.clone().unwrap_or_default()
            )?;
        }
        println!("Wrote outcomes to {}", path.display());
    }

    Ok(())
}
