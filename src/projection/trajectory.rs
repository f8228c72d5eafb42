//! Trajectory output structures for growth projections

use serde::{Deserialize, Serialize};
use std::io::Write;

/// Year-end snapshot of an investment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearPoint {
    #[serde(rename = "Year")]
    pub year: u32,
    #[serde(rename = "Value")]
    pub value: f64,
    #[serde(rename = "Contributions")]
    pub contributions: f64,
    /// Always `value - contributions`
    #[serde(rename = "Gain")]
    pub gain: f64,
}

impl YearPoint {
    pub fn new(year: u32, value: f64, contributions: f64) -> Self {
        Self {
            year,
            value,
            contributions,
            gain: value - contributions,
        }
    }
}

/// Final figures of a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EtfSummary {
    pub final_value: f64,
    pub total_contributions: f64,
    pub total_gain: f64,
}

impl EtfSummary {
    pub fn new(final_value: f64, total_contributions: f64) -> Self {
        Self {
            final_value,
            total_contributions,
            total_gain: final_value - total_contributions,
        }
    }
}

impl From<&YearPoint> for EtfSummary {
    fn from(point: &YearPoint) -> Self {
        Self::new(point.value, point.contributions)
    }
}

/// Complete projection result: final figures plus the yearly trajectory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EtfResult {
    pub final_value: f64,
    pub total_contributions: f64,
    pub total_gain: f64,

    /// One point per year from 0 through the horizon, in chronological order
    pub yearly_trajectory: Vec<YearPoint>,
}

impl EtfResult {
    pub(crate) fn new(summary: EtfSummary, yearly_trajectory: Vec<YearPoint>) -> Self {
        Self {
            final_value: summary.final_value,
            total_contributions: summary.total_contributions,
            total_gain: summary.total_gain,
            yearly_trajectory,
        }
    }

    /// Get the final figures without the trajectory
    pub fn summary(&self) -> EtfSummary {
        EtfSummary {
            final_value: self.final_value,
            total_contributions: self.total_contributions,
            total_gain: self.total_gain,
        }
    }
}

/// Write a trajectory as CSV with a header row
pub fn write_trajectory_csv<W: Write>(writer: W, trajectory: &[YearPoint]) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in trajectory {
        csv_writer.serialize(point)?;
    }
    csv_writer.flush()?;
    Ok(())
}
