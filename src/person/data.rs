//! Person data structures and the income model

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::rates::DeductionRates;

/// A single person record supplied by the caller
///
/// Constructed once from user-supplied values and never mutated; everything
/// derived from it (income figures, budgets) is recomputed on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Display name (not used in any calculation)
    pub name: String,

    /// Age in whole years
    pub age: u8,

    /// Gross monthly salary
    pub gross_salary: f64,

    /// Yearly bonus as a fraction of annual gross income (0.1 = 10%)
    pub bonus_rate: f64,

    /// Current savings balance
    pub savings: f64,
}

impl Person {
    pub fn new(name: &str, age: u8, gross_salary: f64, bonus_rate: f64, savings: f64) -> Self {
        Self {
            name: name.to_string(),
            age,
            gross_salary,
            bonus_rate,
            savings,
        }
    }
}

/// Derives net income figures from gross salary under a fixed set of
/// statutory deduction rates
///
/// All operations are pure functions of the person and the rates; nothing is
/// cached between calls.
#[derive(Debug, Clone)]
pub struct IncomeModel {
    rates: DeductionRates,
}

impl IncomeModel {
    pub fn new(rates: DeductionRates) -> Self {
        Self { rates }
    }

    /// Monthly salary after income tax, social security, and health care
    /// contributions, plus the flat taxpayer credit
    pub fn net_monthly_salary(&self, person: &Person) -> Result<f64> {
        if person.gross_salary < 0.0 {
            return Err(PlanError::InvalidInput(format!(
                "gross salary must be non-negative, got {}",
                person.gross_salary
            )));
        }
        let deductions = person.gross_salary * self.rates.total_rate();
        Ok(person.gross_salary - deductions + self.rates.taxpayer_monthly_credit)
    }

    /// Annual bonus amount: 12 x gross salary x bonus rate
    pub fn annual_bonus(&self, person: &Person) -> f64 {
        12.0 * person.gross_salary * person.bonus_rate
    }

    /// Net annual income: 12 net monthly salaries plus the annual bonus
    pub fn net_annual_income(&self, person: &Person) -> Result<f64> {
        Ok(self.net_monthly_salary(person)? * 12.0 + self.annual_bonus(person))
    }

    /// Net monthly income including the bonus spread across the year
    pub fn net_monthly_income(&self, person: &Person) -> Result<f64> {
        Ok(self.net_annual_income(person)? / 12.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn model() -> IncomeModel {
        IncomeModel::new(DeductionRates::default())
    }

    #[test]
    fn test_net_monthly_salary() {
        let person = Person::new("Test", 30, 100_000.0, 0.0, 0.0);

        // 100000 - 100000*(0.15 + 0.065 + 0.045) + 2570
        let net = model().net_monthly_salary(&person).unwrap();
        assert_relative_eq!(net, 76_570.0);
    }

    #[test]
    fn test_zero_bonus_rate() {
        let person = Person::new("Test", 30, 80_000.0, 0.0, 0.0);
        assert_eq!(model().annual_bonus(&person), 0.0);
    }

    #[test]
    fn test_income_identity() {
        // net_annual == 12 * net_monthly_salary + 12 * gross * bonus_rate
        let model = model();
        for (gross, bonus) in [(45_000.0, 0.0), (110_000.0, 0.1), (250_000.0, 0.25)] {
            let person = Person::new("Test", 40, gross, bonus, 0.0);
            let annual = model.net_annual_income(&person).unwrap();
            let expected =
                12.0 * model.net_monthly_salary(&person).unwrap() + 12.0 * gross * bonus;
            assert_relative_eq!(annual, expected);
            assert_relative_eq!(model.net_monthly_income(&person).unwrap(), annual / 12.0);
        }
    }

    #[test]
    fn test_negative_salary_rejected() {
        let person = Person::new("Test", 30, -1.0, 0.0, 0.0);
        assert!(matches!(
            model().net_monthly_salary(&person),
            Err(PlanError::InvalidInput(_))
        ));
        assert!(model().net_annual_income(&person).is_err());
    }
}
