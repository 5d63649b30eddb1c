//! Amortization schedule output structures

use serde::{Deserialize, Serialize};

/// A single month of an amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Month index, 1-based and sequential
    pub month: u32,

    /// Total amount paid this month (scheduled payment plus any extra payment)
    pub payment: f64,

    /// Portion of the payment reducing the principal (includes the extra payment)
    pub principal_payment: f64,

    /// Interest accrued on the remaining balance this month
    pub interest_payment: f64,

    /// Insurance surcharge component, 0 when insurance is not taken
    pub insurance_payment: f64,

    /// Principal balance remaining after this month's payment
    pub remaining_balance: f64,
}

/// Full amortization schedule for one loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// Borrowed principal (property price net of the down payment)
    pub principal: f64,

    /// Scheduled monthly payment including insurance, excluding extra payments
    pub monthly_payment: f64,

    /// Monthly rows until payoff or term exhaustion
    pub rows: Vec<AmortizationRow>,
}

impl AmortizationSchedule {
    pub fn new(principal: f64, monthly_payment: f64) -> Self {
        Self {
            principal,
            monthly_payment,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: AmortizationRow) {
        self.rows.push(row);
    }

    /// Month index of the last row; fewer than the full term when extra
    /// payments retire the loan early
    pub fn months_to_payoff(&self) -> u32 {
        self.rows.last().map(|r| r.month).unwrap_or(0)
    }

    /// Payoff horizon in fractional years
    pub fn years_to_payoff(&self) -> f64 {
        self.months_to_payoff() as f64 / 12.0
    }

    /// Total cost over the lifetime of the loan: cumulative principal,
    /// interest, and insurance paid
    pub fn total_cost(&self) -> f64 {
        self.rows
            .iter()
            .map(|r| r.principal_payment + r.interest_payment + r.insurance_payment)
            .sum()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ScheduleSummary {
        let total_principal: f64 = self.rows.iter().map(|r| r.principal_payment).sum();
        let total_interest: f64 = self.rows.iter().map(|r| r.interest_payment).sum();
        let total_insurance: f64 = self.rows.iter().map(|r| r.insurance_payment).sum();
        let final_balance = self.rows.last().map(|r| r.remaining_balance).unwrap_or(0.0);

        ScheduleSummary {
            months_to_payoff: self.months_to_payoff(),
            monthly_payment: self.monthly_payment,
            total_principal,
            total_interest,
            total_insurance,
            total_cost: total_principal + total_interest + total_insurance,
            final_balance,
        }
    }
}

/// Summary statistics for a schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub months_to_payoff: u32,
    pub monthly_payment: f64,
    pub total_principal: f64,
    pub total_interest: f64,
    pub total_insurance: f64,
    pub total_cost: f64,
    pub final_balance: f64,
}
