//! Investment strategies: named parameter sets, their projections, and comparison
//!
//! Strategy presets are supplied by the caller (see [`loader`]); nothing here
//! assumes default rates or amounts.

mod compare;
pub mod loader;

pub use compare::{compare_one, compare_strategies, ComparisonEntry, StrategyTrajectory};
pub use loader::{load_strategies, LoadError, DEFAULT_STRATEGIES_PATH};

use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::projection::{project, EtfParameters, EtfResult};

/// A named investment plan and, once projected, its result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    pub id: String,
    pub name: String,
    pub parameters: EtfParameters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<EtfResult>,
}

impl Strategy {
    pub fn new(id: impl Into<String>, name: impl Into<String>, parameters: EtfParameters) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parameters,
            result: None,
        }
    }

    /// Run the projection and store the result, replacing any earlier one
    pub fn project(&mut self) {
        self.result = Some(project(&self.parameters));
    }

    /// Trajectory view for comparison; fails if not yet projected
    pub fn trajectory(&self) -> Result<StrategyTrajectory<'_>> {
        let result = self.result.as_ref().ok_or_else(|| PlannerError::NotProjected {
            id: self.id.clone(),
        })?;
        Ok(StrategyTrajectory::new(&self.name, &result.yearly_trajectory))
    }
}

/// An ordered collection of strategies to project and compare together
///
/// # Example
/// ```ignore
/// let mut set = StrategySet::new(load_strategies("data/strategies.csv")?);
/// set.project_all();
/// for entry in set.compare()? {
///     println!("{}: {:.1}%", entry.name, entry.growth_percentage);
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategySet {
    strategies: Vec<Strategy>,
}

impl StrategySet {
    pub fn new(strategies: Vec<Strategy>) -> Self {
        Self { strategies }
    }

    pub fn push(&mut self, strategy: Strategy) {
        self.strategies.push(strategy);
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Look up a strategy by id
    pub fn get(&self, id: &str) -> Option<&Strategy> {
        self.strategies.iter().find(|s| s.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Strategy> {
        self.strategies.iter_mut().find(|s| s.id == id)
    }

    /// Project every strategy; strategies are independent so run in parallel
    pub fn project_all(&mut self) {
        info!("projecting {} strategies", self.strategies.len());
        self.strategies.par_iter_mut().for_each(Strategy::project);
    }

    /// Compare all strategies in set order
    pub fn compare(&self) -> Result<Vec<ComparisonEntry>> {
        let trajectories = self
            .strategies
            .iter()
            .map(Strategy::trajectory)
            .collect::<Result<Vec<_>>>()?;
        compare_strategies(&trajectories)
    }
}

impl From<Vec<Strategy>> for StrategySet {
    fn from(strategies: Vec<Strategy>) -> Self {
        Self::new(strategies)
    }
}
