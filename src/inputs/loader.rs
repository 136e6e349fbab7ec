//! Load parameter sets from CSV for batch evaluation
//!
//! Columns are the field keys (`area_acres`, `mortality_percent`, ...) plus an
//! optional `scenario` label. Missing labels are numbered from 1.

use super::InputParameters;
use crate::error::Result;
use csv::Reader;
use serde::Deserialize;
use std::path::Path;

/// Raw CSV row
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    scenario: Option<String>,
    area_acres: f64,
    mortality_percent: f64,
    carbon_stock_t_per_ha: f64,
    sequestration_rate_t_per_ha_yr: f64,
    scc_low_usd_per_tco2: f64,
    scc_high_usd_per_tco2: f64,
    car_emissions_t_per_car_yr: f64,
}

impl CsvRow {
    fn into_scenario(self, row_number: usize) -> LabeledInputs {
        let label = match self.scenario {
            Some(s) if !s.trim().is_empty() => s.trim().to_string(),
            _ => row_number.to_string(),
        };

        LabeledInputs {
            label,
            inputs: InputParameters {
                area_acres: self.area_acres,
                mortality_percent: self.mortality_percent,
                carbon_stock_t_per_ha: self.carbon_stock_t_per_ha,
                sequestration_rate_t_per_ha_yr: self.sequestration_rate_t_per_ha_yr,
                scc_low_usd_per_tco2: self.scc_low_usd_per_tco2,
                scc_high_usd_per_tco2: self.scc_high_usd_per_tco2,
                car_emissions_t_per_car_yr: self.car_emissions_t_per_car_yr,
            },
        }
    }
}

/// A parameter set tagged with the scenario label it was loaded under
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledInputs {
    pub label: String,
    pub inputs: InputParameters,
}

/// Load all parameter sets from a CSV file
pub fn load_inputs<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledInputs>> {
    let reader = Reader::from_path(path)?;
    collect_rows(reader)
}

/// Load parameter sets from any reader (e.g., string buffer, stdin)
pub fn load_inputs_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<LabeledInputs>> {
    collect_rows(Reader::from_reader(reader))
}

fn collect_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<LabeledInputs>> {
    let mut scenarios = Vec::new();

    for (i, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario(i + 1));
    }

    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
scenario,area_acres,mortality_percent,carbon_stock_t_per_ha,sequestration_rate_t_per_ha_yr,scc_low_usd_per_tco2,scc_high_usd_per_tco2,car_emissions_t_per_car_yr
baseline,100000,10,50,0.5,51,190,4.6
,25000,30,120,1.5,0,500,6
";

    #[test]
    fn test_load_from_reader() {
        let rows = load_inputs_from_reader(SAMPLE.as_bytes()).expect("Failed to load inputs");
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].label, "baseline");
        assert_eq!(rows[0].inputs, InputParameters::default());

        // Blank label falls back to the row number
        assert_eq!(rows[1].label, "2");
        assert_eq!(rows[1].inputs.area_acres, 25_000.0);
        assert_eq!(rows[1].inputs.scc_high_usd_per_tco2, 500.0);
    }

    #[test]
    fn test_scenario_column_optional() {
        let csv = "\
area_acres,mortality_percent,carbon_stock_t_per_ha,sequestration_rate_t_per_ha_yr,scc_low_usd_per_tco2,scc_high_usd_per_tco2,car_emissions_t_per_car_yr
500,5,80,1,10,20,4.6
";
        let rows = load_inputs_from_reader(csv.as_bytes()).expect("Failed to load inputs");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label, "1");
        assert_eq!(rows[0].inputs.carbon_stock_t_per_ha, 80.0);
    }

    #[test]
    fn test_malformed_number_is_error() {
        let csv = "\
area_acres,mortality_percent,carbon_stock_t_per_ha,sequestration_rate_t_per_ha_yr,scc_low_usd_per_tco2,scc_high_usd_per_tco2,car_emissions_t_per_car_yr
lots,5,80,1,10,20,4.6
";
        assert!(load_inputs_from_reader(csv.as_bytes()).is_err());
    }
}
