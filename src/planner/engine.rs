//! The affordability planner
//!
//! Combines the income model, budget weights, borrowing limits, and the
//! mortgage engine into purchase-timeline projections for one person.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::mortgage::{LoanParameters, MortgageEngine, MAXIMUM_ANNUAL_INTEREST_RATE};
use crate::person::{IncomeModel, Person};
use crate::rates::{CategoryWeights, Rates};

use super::budget::BudgetAllocation;

/// Months of housing + groceries spending required as an emergency fund
pub const EMERGENCY_FUND_MONTHS: f64 = 3.0;

/// Down payment fraction assumed by the mortgage timeline
const TIMELINE_DOWN_PAYMENT_FRACTION: f64 = 0.2;

/// Loan term assumed by the mortgage timeline
const TIMELINE_LOAN_TERM_YEARS: u32 = 15;

/// Strategy for acquiring the house
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseStrategy {
    Mortgage,
    Cash,
}

impl HouseStrategy {
    pub const ALL: [HouseStrategy; 2] = [HouseStrategy::Mortgage, HouseStrategy::Cash];

    pub fn as_str(&self) -> &'static str {
        match self {
            HouseStrategy::Mortgage => "mortgage",
            HouseStrategy::Cash => "cash",
        }
    }
}

impl fmt::Display for HouseStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HouseStrategy {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mortgage" => Ok(HouseStrategy::Mortgage),
            "cash" => Ok(HouseStrategy::Cash),
            _ => Err(PlanError::UnsupportedStrategy(s.to_string())),
        }
    }
}

/// Advisory verdict on whether the savings journey can start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FinancialStability {
    /// Emergency fund is in place; this much is free each month for saving
    /// and investing towards the purchase
    Stable { monthly_savings: f64 },
    /// Savings are below the emergency fund; save this much first
    Unstable { required: f64 },
}

impl FinancialStability {
    pub fn is_stable(&self) -> bool {
        matches!(self, FinancialStability::Stable { .. })
    }

    /// Human-readable explanation surfaced to the caller
    pub fn message(&self) -> String {
        match self {
            FinancialStability::Stable { monthly_savings } => format!(
                "Financially stable: you have {:.1} per month to divide between \
                 saving and investing to prepare for your home purchase.",
                monthly_savings
            ),
            FinancialStability::Unstable { required } => format!(
                "Not financially stable: first save at least 3 months worth of \
                 necessary expenses, which for your salary is {:.1}.",
                required
            ),
        }
    }
}

/// Maximum borrowing figures for one person and property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorrowingCapacity {
    /// Maximum total debt permitted on the person's name (DTI cap)
    pub max_debt: f64,

    /// Maximum amount a bank will lend against the property (LTV cap)
    pub max_loan_value: f64,
}

/// Projected acquisition timeline for one strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseTimeline {
    pub strategy: HouseStrategy,

    /// Whole years of saving before the purchase can start
    pub years_to_save: u32,

    /// Total cost of the acquisition including rent paid while saving
    pub total_cost: f64,
}

/// Affordability planner for a single person
///
/// The budget allocation and emergency fund are derived once at construction
/// and are immutable afterwards; every projection call is independent.
#[derive(Debug, Clone)]
pub struct AffordabilityPlanner {
    person: Person,
    rates: Rates,
    income: IncomeModel,
    weights: CategoryWeights,
    net_monthly_income: f64,
    monthly_budget: BudgetAllocation,
    emergency_fund: f64,
}

impl AffordabilityPlanner {
    /// Create a planner, deriving the budget and emergency fund
    ///
    /// Fails with [`PlanError::BudgetIntegrity`] when the rounded category
    /// amounts do not sum back to rounded net monthly income.
    pub fn new(person: Person, rates: Rates) -> Result<Self> {
        let income = IncomeModel::new(rates.deductions.clone());
        let net_monthly_income = income.net_monthly_income(&person)?;
        let weights = *rates.budget.for_gross_salary(person.gross_salary);

        let monthly_budget = Self::allocate(&weights, net_monthly_income)?;
        let emergency_fund =
            EMERGENCY_FUND_MONTHS * (monthly_budget.housing + monthly_budget.groceries);

        Ok(Self {
            person,
            rates,
            income,
            weights,
            net_monthly_income,
            monthly_budget,
            emergency_fund,
        })
    }

    /// Distribute net monthly income across the categories, rounding each to
    /// the nearest whole currency unit
    ///
    /// The per-category rounding order is deliberate; its drift against the
    /// rounded net income is validated rather than redistributed.
    fn allocate(weights: &CategoryWeights, net_monthly_income: f64) -> Result<BudgetAllocation> {
        let allocation = BudgetAllocation {
            housing: (weights.housing * net_monthly_income).round(),
            groceries: (weights.groceries * net_monthly_income).round(),
            savings_and_investments: (weights.savings_and_investments * net_monthly_income)
                .round(),
            leisure: (weights.leisure * net_monthly_income).round(),
        };

        let allocated = allocation.total();
        if allocated != net_monthly_income.round() {
            return Err(PlanError::BudgetIntegrity {
                allocated,
                net_monthly_income,
            });
        }
        Ok(allocation)
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Monthly budget allocation derived at construction
    pub fn budget(&self) -> &BudgetAllocation {
        &self.monthly_budget
    }

    /// Savings floor: 3 months of housing + groceries
    pub fn emergency_fund(&self) -> f64 {
        self.emergency_fund
    }

    pub fn net_monthly_income(&self) -> f64 {
        self.net_monthly_income
    }

    /// Maximum debt and loan figures for a property at the person's age
    pub fn borrowing_limits(&self, property_price: f64) -> Result<BorrowingCapacity> {
        if property_price <= 0.0 {
            return Err(PlanError::InvalidInput(format!(
                "property price must be positive, got {}",
                property_price
            )));
        }
        let net_annual_income = self.income.net_annual_income(&self.person)?;

        Ok(BorrowingCapacity {
            max_debt: self.rates.borrowing.max_debt(self.person.age, net_annual_income),
            max_loan_value: self
                .rates
                .borrowing
                .max_loan_value(self.person.age, property_price),
        })
    }

    /// Advisory check: is the emergency fund in place?
    pub fn financial_stability(&self) -> FinancialStability {
        if self.person.savings < self.emergency_fund {
            FinancialStability::Unstable {
                required: self.emergency_fund,
            }
        } else {
            FinancialStability::Stable {
                monthly_savings: self.monthly_budget.savings_and_investments,
            }
        }
    }

    pub fn is_financially_stable(&self) -> bool {
        self.financial_stability().is_stable()
    }

    /// Unrounded monthly contribution towards savings goals
    fn monthly_saving(&self) -> f64 {
        self.weights.savings_and_investments * self.net_monthly_income
    }

    /// Years (fractional, unrounded) until the down payment is saved
    pub fn months_to_save_for_mortgage(
        &self,
        property_price: f64,
        down_payment_fraction: f64,
    ) -> Result<f64> {
        if property_price <= 0.0 || down_payment_fraction < 0.0 {
            return Err(PlanError::InvalidInput(format!(
                "need a positive property price and non-negative down payment fraction, \
                 got {} and {}",
                property_price, down_payment_fraction
            )));
        }
        let down_payment = property_price * down_payment_fraction;
        self.savings_horizon(down_payment, self.monthly_saving())
    }

    /// Years (fractional, unrounded) until the full property price is saved
    ///
    /// Rent below the housing budget frees the difference as extra savings
    /// capacity each month.
    pub fn months_to_save_for_cash(&self, current_rent: f64, property_price: f64) -> Result<f64> {
        if property_price <= 0.0 || current_rent < 0.0 {
            return Err(PlanError::InvalidInput(format!(
                "need a positive property price and non-negative rent, got {} and {}",
                property_price, current_rent
            )));
        }

        let monthly_post_housing = self.weights.housing * self.net_monthly_income - current_rent;

        let mut monthly_saving = self.monthly_saving();
        if monthly_post_housing > 0.0 {
            monthly_saving += monthly_post_housing;
        }

        self.savings_horizon(property_price, monthly_saving)
    }

    /// Accumulate monthly savings until the target is met
    ///
    /// Savings beyond the emergency fund count towards the target from the
    /// start. A non-positive contribution with an unmet target would loop
    /// forever and is rejected instead.
    fn savings_horizon(&self, target: f64, monthly_saving: f64) -> Result<f64> {
        let mut amount_saved = self.person.savings - self.emergency_fund;
        if amount_saved >= target {
            return Ok(0.0);
        }
        if monthly_saving <= 0.0 {
            return Err(PlanError::NonConvergingPlan { monthly_saving });
        }

        let mut months_to_save: u32 = 0;
        while amount_saved < target {
            amount_saved += monthly_saving;
            months_to_save += 1;
        }

        Ok(months_to_save as f64 / 12.0)
    }

    /// Project the acquisition timeline for one strategy
    pub fn project_timeline(
        &self,
        current_rent: f64,
        property_price: f64,
        strategy: HouseStrategy,
    ) -> Result<HouseTimeline> {
        if current_rent < 0.0 {
            return Err(PlanError::InvalidInput(format!(
                "rent must be non-negative, got {}",
                current_rent
            )));
        }

        match strategy {
            HouseStrategy::Mortgage => {
                let years = self
                    .months_to_save_for_mortgage(property_price, TIMELINE_DOWN_PAYMENT_FRACTION)?
                    .round();

                // 15-year mortgage at the maximum market rate, through the
                // engine carrying the down-payment rate discounts
                let engine = MortgageEngine::with_rate_discounts(self.rates.discounts.clone());
                let params = LoanParameters::new(
                    property_price,
                    TIMELINE_DOWN_PAYMENT_FRACTION,
                    MAXIMUM_ANNUAL_INTEREST_RATE,
                    TIMELINE_LOAN_TERM_YEARS,
                );
                let schedule = engine.build_schedule(&params)?;

                let total_cost = (schedule.total_cost() + current_rent * 12.0 * years).round();
                Ok(HouseTimeline {
                    strategy,
                    years_to_save: years as u32,
                    total_cost,
                })
            }
            HouseStrategy::Cash => {
                let years = self.months_to_save_for_cash(current_rent, property_price)?.round();
                let total_cost = (property_price + current_rent * 12.0 * years).round();
                Ok(HouseTimeline {
                    strategy,
                    years_to_save: years as u32,
                    total_cost,
                })
            }
        }
    }
}
