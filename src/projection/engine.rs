//! Monthly compounding engine for lump-sum plus recurring contribution investments

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use super::rates::net_monthly_rate;
use super::state::GrowthState;
use super::trajectory::{EtfResult, EtfSummary, YearPoint};

/// Inputs for a growth projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EtfParameters {
    /// Lump sum invested at month 0
    pub initial_investment: f64,

    /// Amount added at the end of every month
    pub monthly_contribution: f64,

    /// Gross annual return (e.g., 0.08 for 8%)
    pub annual_return_rate: f64,

    /// Annual fund fee, subtracted from the annual return before compounding
    pub expense_ratio: f64,

    /// Projection horizon in whole years
    pub years: u32,
}

/// Growth projection engine
#[derive(Debug, Clone)]
pub struct GrowthEngine {
    params: EtfParameters,
}

impl GrowthEngine {
    pub fn new(params: EtfParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &EtfParameters {
        &self.params
    }

    /// Net monthly rate this engine compounds at
    pub fn monthly_rate(&self) -> f64 {
        net_monthly_rate(self.params.annual_return_rate, self.params.expense_ratio)
    }

    /// Run the month loop, handing each year-end state to `on_year_end`
    ///
    /// Every public projection goes through here so that the final figures
    /// and the last trajectory point come from the same arithmetic.
    fn simulate<F: FnMut(&GrowthState)>(&self, mut on_year_end: F) -> GrowthState {
        let net_factor = 1.0 + self.params.annual_return_rate - self.params.expense_ratio;
        if net_factor <= 0.0 {
            warn!(
                "net annual growth factor {} is not positive; projected values will not be finite",
                net_factor
            );
        }

        let monthly_rate = self.monthly_rate();
        let months = self.params.years.saturating_mul(12);
        debug!(
            "projecting {} months at net monthly rate {:.8}",
            months, monthly_rate
        );

        let mut state = GrowthState::from_params(&self.params);
        for _month in 1..=months {
            state.advance_month(monthly_rate, self.params.monthly_contribution);

            if state.is_year_end() {
                trace!(
                    "year {}: value={:.2} contributions={:.2}",
                    state.year(),
                    state.value,
                    state.contributions
                );
                on_year_end(&state);
            }
        }

        state
    }

    /// Final value, contributions and gain at the horizon
    pub fn project_final(&self) -> EtfSummary {
        let state = self.simulate(|_| {});
        EtfSummary::new(state.value, state.contributions)
    }

    /// Year-end snapshots from year 0 through the horizon
    pub fn project_trajectory(&self) -> Vec<YearPoint> {
        self.project().yearly_trajectory
    }

    /// Final figures and trajectory from a single simulation pass
    pub fn project(&self) -> EtfResult {
        let mut trajectory = Vec::with_capacity(self.params.years as usize + 1);
        trajectory.push(YearPoint::new(
            0,
            self.params.initial_investment,
            self.params.initial_investment,
        ));

        let state = self.simulate(|state| trajectory.push(state.snapshot()));
        EtfResult::new(EtfSummary::new(state.value, state.contributions), trajectory)
    }
}

/// Final figures for an initial investment plus monthly contributions
pub fn project_final(
    initial_investment: f64,
    monthly_contribution: f64,
    annual_return_rate: f64,
    years: u32,
    expense_ratio: f64,
) -> EtfSummary {
    GrowthEngine::new(EtfParameters {
        initial_investment,
        monthly_contribution,
        annual_return_rate,
        expense_ratio,
        years,
    })
    .project_final()
}

/// Yearly trajectory for an initial investment plus monthly contributions
///
/// Returns `years + 1` points; point 0 is the untouched lump sum.
pub fn project_trajectory(
    initial_investment: f64,
    monthly_contribution: f64,
    annual_return_rate: f64,
    years: u32,
    expense_ratio: f64,
) -> Vec<YearPoint> {
    GrowthEngine::new(EtfParameters {
        initial_investment,
        monthly_contribution,
        annual_return_rate,
        expense_ratio,
        years,
    })
    .project_trajectory()
}

/// Full projection result for a parameter set
pub fn project(params: &EtfParameters) -> EtfResult {
    GrowthEngine::new(*params).project()
}
