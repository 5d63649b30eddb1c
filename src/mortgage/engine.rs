//! Mortgage engine: builds month-by-month amortization schedules

use crate::error::{PlanError, Result};
use crate::rates::RateDiscountTable;

use super::schedule::{AmortizationRow, AmortizationSchedule};

/// Maximum annual interest rate in percent (Czech market range 5.8-7% in 2023)
pub const MAXIMUM_ANNUAL_INTEREST_RATE: f64 = 6.0;

/// Payment loading when mortgage insurance is taken
const INSURANCE_LOADING: f64 = 1.088;

/// Share of the base payment that the insurance surcharge represents
const INSURANCE_SHARE: f64 = 0.088;

/// Parameters for one mortgage loan
#[derive(Debug, Clone)]
pub struct LoanParameters {
    /// Full price of the property
    pub property_price: f64,

    /// Down payment, either as a fraction (<= 1) or a percentage (> 1)
    pub down_payment_percentage: f64,

    /// Nominal annual interest rate in percent
    pub annual_interest_rate: f64,

    /// Loan term in years (typically 15 or 30)
    pub loan_term_years: u32,

    /// Insurance against unforeseeable tragedies (illness, death)
    pub with_insurance: bool,

    /// Optional extra amount paid to the principal every month
    pub monthly_extra_payment: f64,
}

impl LoanParameters {
    pub fn new(
        property_price: f64,
        down_payment_percentage: f64,
        annual_interest_rate: f64,
        loan_term_years: u32,
    ) -> Self {
        Self {
            property_price,
            down_payment_percentage,
            annual_interest_rate,
            loan_term_years,
            with_insurance: false,
            monthly_extra_payment: 0.0,
        }
    }

    /// Down payment normalized to a 0-100 percentage
    ///
    /// Values at or below 1 are treated as fractions (0.2 -> 20%).
    pub fn normalized_down_payment_pct(&self) -> f64 {
        if self.down_payment_percentage <= 1.0 {
            self.down_payment_percentage * 100.0
        } else {
            self.down_payment_percentage
        }
    }

    /// Down payment amount in currency units
    pub fn down_payment(&self) -> f64 {
        self.property_price * self.normalized_down_payment_pct() / 100.0
    }

    fn validate(&self) -> Result<()> {
        if self.property_price <= 0.0 {
            return Err(PlanError::InvalidInput(format!(
                "property price must be positive, got {}",
                self.property_price
            )));
        }
        if self.loan_term_years == 0 {
            return Err(PlanError::InvalidInput(
                "loan term must be at least one year".to_string(),
            ));
        }
        if self.annual_interest_rate < 0.0 {
            return Err(PlanError::InvalidInput(format!(
                "interest rate must be non-negative, got {}",
                self.annual_interest_rate
            )));
        }
        if self.monthly_extra_payment < 0.0 {
            return Err(PlanError::InvalidInput(format!(
                "extra payment must be non-negative, got {}",
                self.monthly_extra_payment
            )));
        }
        let down_pct = self.normalized_down_payment_pct();
        if !(0.0..=100.0).contains(&down_pct) {
            return Err(PlanError::InvalidInput(format!(
                "down payment percentage must be within 0-100, got {}",
                down_pct
            )));
        }
        Ok(())
    }
}

/// Amortization engine
///
/// One canonical algorithm covers both calculator variants: the plain engine
/// uses the nominal rate unmodified, while an engine carrying a
/// [`RateDiscountTable`] discounts the rate by down-payment tier.
#[derive(Debug, Clone, Default)]
pub struct MortgageEngine {
    discounts: RateDiscountTable,
}

impl MortgageEngine {
    /// Engine without rate discounting (the plain calculator)
    pub fn new() -> Self {
        Self {
            discounts: RateDiscountTable::none(),
        }
    }

    /// Engine that discounts the nominal rate by down-payment tier
    pub fn with_rate_discounts(discounts: RateDiscountTable) -> Self {
        Self { discounts }
    }

    /// Effective annual rate after any down-payment-tier discount
    pub fn effective_annual_rate(&self, params: &LoanParameters) -> f64 {
        self.discounts
            .apply(params.annual_interest_rate, params.normalized_down_payment_pct())
    }

    /// Build the full amortization schedule for a loan
    ///
    /// The schedule runs until term exhaustion, or earlier when extra
    /// payments retire the principal before the term ends.
    pub fn build_schedule(&self, params: &LoanParameters) -> Result<AmortizationSchedule> {
        params.validate()?;

        let down_pct = params.normalized_down_payment_pct();
        let annual_rate = self.effective_annual_rate(params);

        let principal = params.property_price - params.property_price * down_pct / 100.0;
        let total_payments = params.loan_term_years * 12;
        let monthly_rate = (annual_rate / 12.0) / 100.0;

        // Standard annuity payment; a zero-interest loan degenerates to a
        // straight principal split (the annuity formula would divide by zero)
        let (monthly_payment, insurance_payment) = if monthly_rate == 0.0 {
            (principal / total_payments as f64, 0.0)
        } else {
            let growth = (1.0 + monthly_rate).powi(total_payments as i32);
            let base = principal * monthly_rate * growth / (growth - 1.0);
            if params.with_insurance {
                (base * INSURANCE_LOADING, base * INSURANCE_SHARE)
            } else {
                (base, 0.0)
            }
        };

        let mut schedule = AmortizationSchedule::new(principal, monthly_payment);
        let mut remaining_balance = principal;

        for month in 1..=total_payments {
            // Overshoot correction: the configured extra payment exceeds what
            // is left, so the previous row was the payoff month
            if remaining_balance - params.monthly_extra_payment < 0.0 {
                remaining_balance += params.monthly_extra_payment;
                log::info!(
                    "last extra payment needed is only {:.0}, loan paid off at month {}",
                    remaining_balance,
                    schedule.months_to_payoff()
                );
                break;
            }

            let interest_payment = remaining_balance * monthly_rate;

            let mut principal_payment = monthly_payment - insurance_payment - interest_payment;
            if params.monthly_extra_payment > 0.0 {
                principal_payment += params.monthly_extra_payment;
            }

            remaining_balance -= principal_payment;

            schedule.add_row(AmortizationRow {
                month,
                payment: monthly_payment + params.monthly_extra_payment,
                principal_payment,
                interest_payment,
                insurance_payment,
                remaining_balance,
            });
        }

        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn plain_loan() -> LoanParameters {
        LoanParameters::new(2_000_000.0, 0.2, 6.0, 30)
    }

    #[test]
    fn test_full_term_balance_reaches_zero() {
        let schedule = MortgageEngine::new().build_schedule(&plain_loan()).unwrap();

        assert_eq!(schedule.rows.len(), 360);
        let final_balance = schedule.rows.last().unwrap().remaining_balance;
        assert!(final_balance.abs() < 1e-4, "final balance {final_balance}");
    }

    #[test]
    fn test_principal_net_of_down_payment() {
        let schedule = MortgageEngine::new().build_schedule(&plain_loan()).unwrap();
        assert_relative_eq!(schedule.principal, 1_600_000.0);

        // A percentage above 1 is taken as-is
        let params = LoanParameters::new(2_000_000.0, 20.0, 6.0, 30);
        let schedule_pct = MortgageEngine::new().build_schedule(&params).unwrap();
        assert_relative_eq!(schedule_pct.principal, schedule.principal);
    }

    #[test]
    fn test_row_decomposition() {
        let mut params = plain_loan();
        params.with_insurance = true;
        params.monthly_extra_payment = 5_000.0;
        let schedule = MortgageEngine::new().build_schedule(&params).unwrap();

        for row in &schedule.rows {
            let components = row.principal_payment + row.interest_payment + row.insurance_payment;
            assert_relative_eq!(components, row.payment, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_balance_strictly_decreases() {
        let schedule = MortgageEngine::new().build_schedule(&plain_loan()).unwrap();

        let mut prev = schedule.principal;
        for row in &schedule.rows {
            assert!(row.remaining_balance < prev);
            prev = row.remaining_balance;
        }
    }

    #[test]
    fn test_insurance_loading() {
        let mut params = plain_loan();
        params.with_insurance = true;

        let with = MortgageEngine::new().build_schedule(&params).unwrap();
        params.with_insurance = false;
        let without = MortgageEngine::new().build_schedule(&params).unwrap();

        assert_relative_eq!(with.monthly_payment, without.monthly_payment * 1.088);
        assert_relative_eq!(
            with.rows[0].insurance_payment,
            without.monthly_payment * 0.088
        );
        assert_eq!(without.rows[0].insurance_payment, 0.0);
    }

    #[test]
    fn test_zero_interest_loan() {
        let params = LoanParameters::new(1_200_000.0, 0.0, 0.0, 10);
        let schedule = MortgageEngine::new().build_schedule(&params).unwrap();

        assert_relative_eq!(schedule.monthly_payment, 10_000.0);
        assert_eq!(schedule.rows.len(), 120);
        assert_eq!(schedule.rows[0].interest_payment, 0.0);
        assert_eq!(schedule.rows[0].insurance_payment, 0.0);
        assert!(schedule.rows.last().unwrap().remaining_balance.abs() < 1e-6);
    }

    #[test]
    fn test_early_payoff_with_extra_payments() {
        // Reference scenario: 1,234,567 at 20% down, 6%, 30 years, insured,
        // 12,345 extra to the principal each month
        let params = LoanParameters {
            property_price: 1_234_567.0,
            down_payment_percentage: 20.0,
            annual_interest_rate: 6.0,
            loan_term_years: 30,
            with_insurance: true,
            monthly_extra_payment: 12_345.0,
        };
        let schedule = MortgageEngine::new().build_schedule(&params).unwrap();

        assert!(schedule.months_to_payoff() < 360);

        let final_balance = schedule.rows.last().unwrap().remaining_balance;
        assert!(final_balance >= 0.0);
        assert!(final_balance < params.monthly_extra_payment);

        // Payment is the annuity value with the insurance loading applied
        let principal = schedule.principal;
        let monthly_rate = 0.06 / 12.0;
        let growth = (1.0_f64 + monthly_rate).powi(360);
        let base = principal * monthly_rate * growth / (growth - 1.0);
        assert_relative_eq!(schedule.monthly_payment, base * 1.088, max_relative = 1e-12);
    }

    #[test]
    fn test_schedules_are_deterministic() {
        let params = plain_loan();
        let engine = MortgageEngine::new();
        let first = engine.build_schedule(&params).unwrap();
        let second = engine.build_schedule(&params).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rate_discount_applies() {
        let params = LoanParameters::new(2_000_000.0, 40.0, 6.0, 30);

        let discounted = MortgageEngine::with_rate_discounts(crate::rates::RateDiscountTable::default());
        assert_relative_eq!(discounted.effective_annual_rate(&params), 5.4);

        // Same schedule as a plain engine quoted directly at the discounted rate
        let equivalent = LoanParameters::new(2_000_000.0, 40.0, 5.4, 30);
        let a = discounted.build_schedule(&params).unwrap();
        let b = MortgageEngine::new().build_schedule(&equivalent).unwrap();
        assert_relative_eq!(a.monthly_payment, b.monthly_payment);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let engine = MortgageEngine::new();

        let mut params = plain_loan();
        params.property_price = 0.0;
        assert!(matches!(
            engine.build_schedule(&params),
            Err(PlanError::InvalidInput(_))
        ));

        let mut params = plain_loan();
        params.loan_term_years = 0;
        assert!(engine.build_schedule(&params).is_err());

        let mut params = plain_loan();
        params.monthly_extra_payment = -1.0;
        assert!(engine.build_schedule(&params).is_err());

        let mut params = plain_loan();
        params.down_payment_percentage = 120.0;
        assert!(engine.build_schedule(&params).is_err());
    }

    #[test]
    fn test_total_cost_sums_components() {
        let mut params = plain_loan();
        params.with_insurance = true;
        let schedule = MortgageEngine::new().build_schedule(&params).unwrap();

        let summary = schedule.summary();
        assert_relative_eq!(
            schedule.total_cost(),
            summary.total_principal + summary.total_interest + summary.total_insurance,
            max_relative = 1e-12
        );
        // Full-term cost repays the whole principal plus interest and insurance
        assert_relative_eq!(summary.total_principal, schedule.principal, max_relative = 1e-9);
        assert!(summary.total_interest > 0.0);
        assert!(summary.total_insurance > 0.0);
    }
}
