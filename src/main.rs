//! Smartvesting CLI
//!
//! Prints a full affordability analysis for one person and one property:
//! budget, emergency fund, borrowing limits, purchase timelines, and the
//! mortgage amortization schedule.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use serde::Serialize;

use smartvesting::mortgage::{LoanParameters, MortgageEngine, MAXIMUM_ANNUAL_INTEREST_RATE};
use smartvesting::planner::{AffordabilityPlanner, HouseStrategy};
use smartvesting::{AmortizationSchedule, Person, Rates};

#[derive(Parser, Debug)]
#[command(name = "smartvesting", about = "Home-affordability analysis", version)]
struct Args {
    /// Display name
    #[arg(long, default_value = "You")]
    name: String,

    /// Age in years
    #[arg(long, default_value_t = 30)]
    age: u8,

    /// Gross monthly salary
    #[arg(long, default_value_t = 100_000.0)]
    gross_salary: f64,

    /// Yearly bonus as a fraction of annual gross income (0.1 = 10%)
    #[arg(long, default_value_t = 0.0)]
    bonus_rate: f64,

    /// Current savings balance
    #[arg(long, default_value_t = 200_000.0)]
    savings: f64,

    /// Current monthly rent
    #[arg(long, default_value_t = 15_000.0)]
    rent: f64,

    /// Price of the property under consideration
    #[arg(long, default_value_t = 2_000_000.0)]
    property_price: f64,

    /// Down payment for the schedule, fraction or percentage
    #[arg(long, default_value_t = 20.0)]
    down_payment: f64,

    /// Annual interest rate in percent for the schedule
    #[arg(long, default_value_t = MAXIMUM_ANNUAL_INTEREST_RATE)]
    interest_rate: f64,

    /// Loan term in years for the schedule
    #[arg(long, default_value_t = 30)]
    loan_term: u32,

    /// Add mortgage insurance to the schedule
    #[arg(long)]
    insurance: bool,

    /// Monthly extra payment to the principal
    #[arg(long, default_value_t = 0.0)]
    extra_payment: f64,

    /// Load rate tables from data/rates/ instead of the built-in values
    #[arg(long)]
    rates_from_csv: bool,

    /// Emit the analysis as JSON instead of console tables
    #[arg(long)]
    json: bool,

    /// Write the full amortization schedule to this CSV file
    #[arg(long)]
    schedule_out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct Report {
    person: Person,
    net_monthly_income: f64,
    budget: smartvesting::planner::BudgetAllocation,
    emergency_fund: f64,
    stability: smartvesting::planner::FinancialStability,
    borrowing: smartvesting::planner::BorrowingCapacity,
    timelines: Vec<smartvesting::planner::HouseTimeline>,
    schedule_summary: smartvesting::mortgage::ScheduleSummary,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let rates = if args.rates_from_csv {
        Rates::from_csv().map_err(|e| anyhow!("failed to load rates: {e}"))?
    } else {
        Rates::default_czech_2023()
    };

    let person = Person::new(
        &args.name,
        args.age,
        args.gross_salary,
        args.bonus_rate,
        args.savings,
    );

    let planner = AffordabilityPlanner::new(person.clone(), rates.clone())?;

    let timelines = HouseStrategy::ALL
        .iter()
        .map(|&strategy| planner.project_timeline(args.rent, args.property_price, strategy))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    // Schedule for the requested loan, rate-discounted like the planner's
    let engine = MortgageEngine::with_rate_discounts(rates.discounts.clone());
    let params = LoanParameters {
        property_price: args.property_price,
        down_payment_percentage: args.down_payment,
        annual_interest_rate: args.interest_rate,
        loan_term_years: args.loan_term,
        with_insurance: args.insurance,
        monthly_extra_payment: args.extra_payment,
    };
    let schedule = engine.build_schedule(&params)?;

    if let Some(path) = &args.schedule_out {
        write_schedule_csv(path, &schedule)?;
        println!("Wrote {} schedule rows to {}", schedule.rows.len(), path.display());
    }

    let report = Report {
        net_monthly_income: planner.net_monthly_income(),
        budget: planner.budget().clone(),
        emergency_fund: planner.emergency_fund(),
        stability: planner.financial_stability(),
        borrowing: planner.borrowing_limits(args.property_price)?,
        timelines,
        schedule_summary: schedule.summary(),
        person,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report, &schedule, args.property_price);
    Ok(())
}

fn print_report(report: &Report, schedule: &AmortizationSchedule, property_price: f64) {
    println!("Smartvesting v{}", env!("CARGO_PKG_VERSION"));
    println!("======================\n");

    println!("Person: {}", report.person.name);
    println!("  Age: {}", report.person.age);
    println!("  Gross salary: {:.0}/month", report.person.gross_salary);
    println!("  Net monthly income: {:.0}", report.net_monthly_income);
    println!("  Savings: {:.0}", report.person.savings);
    println!();

    println!("Monthly budget:");
    println!("  {:<24} {:>12.0}", "Housing", report.budget.housing);
    println!("  {:<24} {:>12.0}", "Groceries", report.budget.groceries);
    println!(
        "  {:<24} {:>12.0}",
        "Savings & investments", report.budget.savings_and_investments
    );
    println!("  {:<24} {:>12.0}", "Leisure", report.budget.leisure);
    println!("  Emergency fund target: {:.0}", report.emergency_fund);
    println!();

    println!("{}", report.stability.message());
    println!();

    println!("Borrowing limits for a {:.0} property:", property_price);
    println!("  Max debt (DTI):  {:.0}", report.borrowing.max_debt);
    println!("  Max loan (LTV):  {:.0}", report.borrowing.max_loan_value);
    println!();

    for timeline in &report.timelines {
        println!(
            "It would take approx. {} years to save and a total cost of approx. {:.0} \
             to get the house using the {} strategy",
            timeline.years_to_save, timeline.total_cost, timeline.strategy
        );
    }
    println!();

    let summary = &report.schedule_summary;
    println!(
        "Mortgage schedule ({} months, {:.0}/month):",
        summary.months_to_payoff, summary.monthly_payment
    );
    println!(
        "{:>5} {:>12} {:>12} {:>12} {:>12} {:>14}",
        "Month", "Payment", "Principal", "Interest", "Insurance", "Balance"
    );
    println!("{}", "-".repeat(72));

    // First 24 months to the console; the full schedule goes to CSV
    for row in schedule.rows.iter().take(24) {
        println!(
            "{:>5} {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
            row.month,
            row.payment,
            row.principal_payment,
            row.interest_payment,
            row.insurance_payment,
            row.remaining_balance
        );
    }
    if schedule.rows.len() > 24 {
        println!("  ... {} more rows", schedule.rows.len() - 24);
    }
    println!();
    println!(
        "Totals: principal {:.0}, interest {:.0}, insurance {:.0}, cost {:.0}",
        summary.total_principal, summary.total_interest, summary.total_insurance, summary.total_cost
    );
}

fn write_schedule_csv(path: &PathBuf, schedule: &AmortizationSchedule) -> Result<()> {
    let mut file = File::create(path)?;
    writeln!(
        file,
        "Month,Payment,PrincipalPayment,InterestPayment,InsurancePayment,RemainingBalance"
    )?;
    for row in &schedule.rows {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{:.2},{:.2}",
            row.month,
            row.payment,
            row.principal_payment,
            row.interest_payment,
            row.insurance_payment,
            row.remaining_balance
        )?;
    }
    Ok(())
}
