//! Side-by-side comparison of projected strategies

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::projection::YearPoint;

/// A named trajectory to compare
#[derive(Debug, Clone, Copy)]
pub struct StrategyTrajectory<'a> {
    pub name: &'a str,
    pub trajectory: &'a [YearPoint],
}

impl<'a> StrategyTrajectory<'a> {
    pub fn new(name: &'a str, trajectory: &'a [YearPoint]) -> Self {
        Self { name, trajectory }
    }
}

/// Final value and overall growth of one strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub name: String,
    pub final_value: f64,
    /// Percent change from the year-0 value to the final value
    pub growth_percentage: f64,
}

/// Growth from the first to the last point of a single trajectory
pub fn compare_one(strategy: StrategyTrajectory<'_>) -> Result<ComparisonEntry> {
    let (first, last) = match (strategy.trajectory.first(), strategy.trajectory.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(PlannerError::EmptyTrajectory {
                name: strategy.name.to_string(),
            })
        }
    };

    let initial_value = first.value;
    if initial_value == 0.0 {
        return Err(PlannerError::ZeroInitialValue {
            name: strategy.name.to_string(),
        });
    }

    let final_value = last.value;
    Ok(ComparisonEntry {
        name: strategy.name.to_string(),
        final_value,
        growth_percentage: (final_value - initial_value) / initial_value * 100.0,
    })
}

/// Compare strategies, one entry per input in input order
///
/// Fails on the first strategy with an empty trajectory or a zero starting value.
pub fn compare_strategies(strategies: &[StrategyTrajectory<'_>]) -> Result<Vec<ComparisonEntry>> {
    strategies.iter().copied().map(compare_one).collect()
}
