//! Retirement funding: total need and the monthly savings that close the gap

mod needs;
mod savings;

pub use needs::estimate_retirement_needs;
pub use savings::{annuity_payment, solve_monthly_savings};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Inputs for a retirement plan
///
/// Ages are signed so that a retirement date in the past evaluates instead
/// of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementParameters {
    pub current_age: i32,
    pub retirement_age: i32,
    pub life_expectancy: i32,

    /// Living expense per month in today's money
    pub monthly_expense: f64,

    /// Savings already held today
    pub current_savings: f64,

    /// Annual investment return as a decimal
    pub annual_return: f64,

    /// Annual inflation as a decimal
    pub inflation_rate: f64,
}

impl RetirementParameters {
    pub fn years_until_retirement(&self) -> i32 {
        self.retirement_age - self.current_age
    }

    pub fn retirement_duration(&self) -> i32 {
        self.life_expectancy - self.retirement_age
    }
}

/// Outcome of a retirement plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementResult {
    pub total_needs: f64,
    pub monthly_savings: f64,
    pub years_until_retirement: i32,
    pub retirement_duration: i32,
}

/// Estimate the retirement need, then solve for the monthly savings
pub fn plan_retirement(params: &RetirementParameters) -> Result<RetirementResult> {
    let total_needs = estimate_retirement_needs(
        params.current_age,
        params.retirement_age,
        params.life_expectancy,
        params.monthly_expense,
        params.inflation_rate,
    );

    let monthly_savings = solve_monthly_savings(
        total_needs,
        params.current_age,
        params.retirement_age,
        params.current_savings,
        params.annual_return,
    )?;

    Ok(RetirementResult {
        total_needs,
        monthly_savings,
        years_until_retirement: params.years_until_retirement(),
        retirement_duration: params.retirement_duration(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;

    fn params() -> RetirementParameters {
        RetirementParameters {
            current_age: 30,
            retirement_age: 65,
            life_expectancy: 85,
            monthly_expense: 50_000.0,
            current_savings: 500_000.0,
            annual_return: 0.07,
            inflation_rate: 0.02,
        }
    }

    #[test]
    fn test_plan_combines_estimator_and_solver() {
        let p = params();
        let result = plan_retirement(&p).unwrap();

        assert_eq!(result.years_until_retirement, 35);
        assert_eq!(result.retirement_duration, 20);
        assert_eq!(result.total_needs, estimate_retirement_needs(30, 65, 85, 50_000.0, 0.02));
        assert_eq!(
            result.monthly_savings,
            solve_monthly_savings(result.total_needs, 30, 65, 500_000.0, 0.07).unwrap()
        );
        assert!(result.monthly_savings > 0.0);
    }

    #[test]
    fn test_plan_with_no_retirement_years() {
        let p = RetirementParameters {
            life_expectancy: 60,
            ..params()
        };
        let result = plan_retirement(&p).unwrap();

        assert_eq!(result.total_needs, 0.0);
        assert_eq!(result.monthly_savings, 0.0);
        assert_eq!(result.retirement_duration, -5);
    }

    #[test]
    fn test_plan_at_retirement_with_shortfall_fails() {
        let p = RetirementParameters {
            current_age: 65,
            current_savings: 0.0,
            ..params()
        };
        assert!(matches!(
            plan_retirement(&p),
            Err(PlannerError::NoSavingsHorizon { months: 0, .. })
        ));
    }
}
