//! Load strategy presets from CSV or JSON files

use super::Strategy;
use crate::projection::EtfParameters;
use csv::Reader;
use log::debug;
use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default location of the sample preset file
pub const DEFAULT_STRATEGIES_PATH: &str = "data/strategies.csv";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported preset file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("strategy at position {0} has an empty id")]
    MissingId(usize),
    #[error("duplicate strategy id: {0}")]
    DuplicateId(String),
}

/// Raw CSV row
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "StrategyID")]
    strategy_id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "InitialInvestment")]
    initial_investment: f64,
    #[serde(rename = "MonthlyContribution")]
    monthly_contribution: f64,
    #[serde(rename = "AnnualReturnRate")]
    annual_return_rate: f64,
    #[serde(rename = "Years")]
    years: u32,
    #[serde(rename = "ExpenseRatio")]
    expense_ratio: f64,
}

impl CsvRow {
    fn into_strategy(self) -> Strategy {
        Strategy::new(
            self.strategy_id.trim(),
            self.name.trim(),
            EtfParameters {
                initial_investment: self.initial_investment,
                monthly_contribution: self.monthly_contribution,
                annual_return_rate: self.annual_return_rate,
                expense_ratio: self.expense_ratio,
                years: self.years,
            },
        )
    }
}

/// Load strategies from a file, choosing the format by extension (`.csv` or `.json`)
pub fn load_strategies<P: AsRef<Path>>(path: P) -> Result<Vec<Strategy>, LoadError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let strategies = match extension.as_deref() {
        Some("csv") => load_strategies_from_csv_reader(std::fs::File::open(path)?)?,
        Some("json") => load_strategies_from_json_str(&std::fs::read_to_string(path)?)?,
        _ => return Err(LoadError::UnsupportedFormat(path.to_path_buf())),
    };

    debug!("loaded {} strategies from {}", strategies.len(), path.display());
    Ok(strategies)
}

/// Load strategies from CSV with a header row
pub fn load_strategies_from_csv_reader<R: Read>(reader: R) -> Result<Vec<Strategy>, LoadError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut strategies = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        strategies.push(row.into_strategy());
    }

    validate(&strategies)?;
    Ok(strategies)
}

/// Load strategies from a JSON array of strategy records
///
/// Any `result` present in the input is dropped; results only come from projection.
pub fn load_strategies_from_json_str(json: &str) -> Result<Vec<Strategy>, LoadError> {
    let mut strategies: Vec<Strategy> = serde_json::from_str(json)?;
    for strategy in &mut strategies {
        strategy.result = None;
    }

    validate(&strategies)?;
    Ok(strategies)
}

fn validate(strategies: &[Strategy]) -> Result<(), LoadError> {
    let mut seen = HashSet::new();
    for (i, strategy) in strategies.iter().enumerate() {
        if strategy.id.is_empty() {
            return Err(LoadError::MissingId(i));
        }
        if !seen.insert(strategy.id.as_str()) {
            return Err(LoadError::DuplicateId(strategy.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRESETS_CSV: &str = "\
StrategyID,Name,InitialInvestment,MonthlyContribution,AnnualReturnRate,Years,ExpenseRatio
1,Conservative,100000,5000,0.05,20,0.002
2,Balanced,100000,5000,0.08,20,0.005
";

    #[test]
    fn test_load_csv() {
        let strategies = load_strategies_from_csv_reader(PRESETS_CSV.as_bytes()).unwrap();

        assert_eq!(strategies.len(), 2);
        assert_eq!(strategies[0].id, "1");
        assert_eq!(strategies[1].name, "Balanced");
        assert_eq!(
            strategies[1].parameters,
            EtfParameters {
                initial_investment: 100_000.0,
                monthly_contribution: 5_000.0,
                annual_return_rate: 0.08,
                expense_ratio: 0.005,
                years: 20,
            }
        );
        assert!(strategies.iter().all(|s| s.result.is_none()));
    }

    #[test]
    fn test_load_json() {
        let json = r#"[
            {
                "id": "index",
                "name": "Index fund",
                "parameters": {
                    "initial_investment": 20000.0,
                    "monthly_contribution": 750.0,
                    "annual_return_rate": 0.07,
                    "expense_ratio": 0.0003,
                    "years": 30
                }
            }
        ]"#;

        let strategies = load_strategies_from_json_str(json).unwrap();
        assert_eq!(strategies.len(), 1);
        assert_eq!(strategies[0].id, "index");
        assert_eq!(strategies[0].parameters.years, 30);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let csv = "\
StrategyID,Name,InitialInvestment,MonthlyContribution,AnnualReturnRate,Years,ExpenseRatio
1,A,1000,10,0.05,5,0.001
1,B,1000,10,0.06,5,0.001
";
        let err = load_strategies_from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateId(id) if id == "1"));
    }

    #[test]
    fn test_empty_id_rejected() {
        let csv = "\
StrategyID,Name,InitialInvestment,MonthlyContribution,AnnualReturnRate,Years,ExpenseRatio
 ,A,1000,10,0.05,5,0.001
";
        let err = load_strategies_from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingId(0)));
    }

    #[test]
    fn test_bad_number_is_csv_error() {
        let csv = "\
StrategyID,Name,InitialInvestment,MonthlyContribution,AnnualReturnRate,Years,ExpenseRatio
1,A,lots,10,0.05,5,0.001
";
        let err = load_strategies_from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn test_unknown_extension() {
        let err = load_strategies("presets.toml").unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_default_preset_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_STRATEGIES_PATH);
        let strategies = load_strategies(path).unwrap();
        assert_eq!(strategies.len(), 3);
    }
}
