//! CSV output for batch runs

use crate::calculator::CalculationBreakdown;
use crate::error::{CalculatorError, Result};
use crate::inputs::LabeledInputs;
use serde::Serialize;
use std::io::Write;

/// One output line: scenario label, the seven inputs, the eight metrics
#[derive(Debug, Serialize)]
struct BatchRow<'a> {
    scenario: &'a str,
    area_acres: f64,
    mortality_percent: f64,
    carbon_stock_t_per_ha: f64,
    sequestration_rate_t_per_ha_yr: f64,
    scc_low_usd_per_tco2: f64,
    scc_high_usd_per_tco2: f64,
    car_emissions_t_per_car_yr: f64,
    co2_avoided_one_time_t: f64,
    cars_equivalent_one_time: f64,
    co2_preserved_annual_t: f64,
    cars_equivalent_annual: f64,
    value_one_time_low_usd: f64,
    value_one_time_high_usd: f64,
    value_annual_low_usd: f64,
    value_annual_high_usd: f64,
}

impl<'a> BatchRow<'a> {
    fn new(scenario: &'a LabeledInputs, breakdown: &CalculationBreakdown) -> Self {
        let p = &scenario.inputs;
        let m = &breakdown.metrics;
        Self {
            scenario: &scenario.label,
            area_acres: p.area_acres,
            mortality_percent: p.mortality_percent,
            carbon_stock_t_per_ha: p.carbon_stock_t_per_ha,
            sequestration_rate_t_per_ha_yr: p.sequestration_rate_t_per_ha_yr,
            scc_low_usd_per_tco2: p.scc_low_usd_per_tco2,
            scc_high_usd_per_tco2: p.scc_high_usd_per_tco2,
            car_emissions_t_per_car_yr: p.car_emissions_t_per_car_yr,
            co2_avoided_one_time_t: m.co2_avoided_one_time_t,
            cars_equivalent_one_time: m.cars_equivalent_one_time,
            co2_preserved_annual_t: m.co2_preserved_annual_t,
            cars_equivalent_annual: m.cars_equivalent_annual,
            value_one_time_low_usd: m.value_one_time_low_usd,
            value_one_time_high_usd: m.value_one_time_high_usd,
            value_annual_low_usd: m.value_annual_low_usd,
            value_annual_high_usd: m.value_annual_high_usd,
        }
    }
}

/// Write scenarios and their results, pairwise, as CSV with a header row.
///
/// Both slices must have the same length.
pub fn write_batch_csv<W: Write>(
    writer: W,
    scenarios: &[LabeledInputs],
    results: &[CalculationBreakdown],
) -> Result<()> {
    if scenarios.len() != results.len() {
        return Err(CalculatorError::LengthMismatch {
            scenarios: scenarios.len(),
            results: results.len(),
        });
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    for (scenario, breakdown) in scenarios.iter().zip(results) {
        csv_writer.serialize(BatchRow::new(scenario, breakdown))?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::BenefitCalculator;
    use crate::inputs::InputParameters;

    #[test]
    fn test_write_batch_csv() {
        let scenarios = vec![LabeledInputs {
            label: "baseline".to_string(),
            inputs: InputParameters::default(),
        }];
        let results: Vec<_> = scenarios
            .iter()
            .map(|s| BenefitCalculator::default().calculate_detailed(&s.inputs))
            .collect();

        let mut buf = Vec::new();
        write_batch_csv(&mut buf, &scenarios, &results).expect("write csv");
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();

        let header = lines.next().unwrap();
        assert!(header.starts_with("scenario,area_acres,mortality_percent"));
        assert!(header.ends_with("value_annual_low_usd,value_annual_high_usd"));
        assert_eq!(header.split(',').count(), 16);

        let row = lines.next().unwrap();
        assert!(row.starts_with("baseline,100000"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_unpaired_results_rejected() {
        let scenarios: Vec<_> = ["a", "b"]
            .iter()
            .map(|label| LabeledInputs {
                label: label.to_string(),
                inputs: InputParameters::default(),
            })
            .collect();
        let results = vec![BenefitCalculator::default().calculate_detailed(&scenarios[0].inputs)];

        let mut buf = Vec::new();
        let err = write_batch_csv(&mut buf, &scenarios, &results).unwrap_err();
        assert!(matches!(err, CalculatorError::LengthMismatch { scenarios: 2, results: 1 }));
        assert!(buf.is_empty());
    }
}
