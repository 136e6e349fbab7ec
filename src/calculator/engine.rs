//! Benefit calculation: inputs to carbon, cars-equivalent and SCC values

use crate::inputs::InputParameters;
use super::metrics::{CalculationBreakdown, OutputMetrics};

/// Exact acres to hectares factor
pub const ACRE_TO_HECTARE: f64 = 0.40468564224;

/// CO2 / C molecular mass ratio
pub const CARBON_TO_CO2: f64 = 3.667;

/// Unit conversion factors used by the calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionFactors {
    pub acre_to_hectare: f64,
    pub carbon_to_co2: f64,
}

impl Default for ConversionFactors {
    fn default() -> Self {
        Self {
            acre_to_hectare: ACRE_TO_HECTARE,
            carbon_to_co2: CARBON_TO_CO2,
        }
    }
}

/// Stateless calculator; cheap to copy and safe to share across threads
#[derive(Debug, Clone, Copy, Default)]
pub struct BenefitCalculator {
    factors: ConversionFactors,
}

impl BenefitCalculator {
    pub fn new(factors: ConversionFactors) -> Self {
        Self { factors }
    }

    /// Compute the eight output metrics
    pub fn calculate(&self, inputs: &InputParameters) -> OutputMetrics {
        self.calculate_detailed(inputs).metrics
    }

    /// Compute the metrics and keep the intermediate quantities.
    ///
    /// Inputs are assumed to be range-checked already; the only guard is on
    /// car emissions, where a non-positive divisor yields zero cars.
    pub fn calculate_detailed(&self, inputs: &InputParameters) -> CalculationBreakdown {
        let area_ha = inputs.area_acres * self.factors.acre_to_hectare;
        let mortality_frac = inputs.mortality_percent / 100.0;

        // One-time pulse: standing carbon in the trees that survive
        let carbon_lost_tc = area_ha * mortality_frac * inputs.carbon_stock_t_per_ha;
        let co2_avoided_one_time_t = carbon_lost_tc * self.factors.carbon_to_co2;

        // Ongoing sink: uptake those trees keep providing
        let annual_carbon_uptake_tc = area_ha * mortality_frac * inputs.sequestration_rate_t_per_ha_yr;
        let co2_preserved_annual_t = annual_carbon_uptake_tc * self.factors.carbon_to_co2;

        let per_car = inputs.car_emissions_t_per_car_yr;
        let cars_equivalent_one_time = cars_equivalent(co2_avoided_one_time_t, per_car);
        let cars_equivalent_annual = cars_equivalent(co2_preserved_annual_t, per_car);

        let metrics = OutputMetrics {
            co2_avoided_one_time_t,
            cars_equivalent_one_time,
            co2_preserved_annual_t,
            cars_equivalent_annual,
            value_one_time_low_usd: co2_avoided_one_time_t * inputs.scc_low_usd_per_tco2,
            value_one_time_high_usd: co2_avoided_one_time_t * inputs.scc_high_usd_per_tco2,
            value_annual_low_usd: co2_preserved_annual_t * inputs.scc_low_usd_per_tco2,
            value_annual_high_usd: co2_preserved_annual_t * inputs.scc_high_usd_per_tco2,
        };

        CalculationBreakdown {
            area_ha,
            mortality_frac,
            carbon_lost_tc,
            annual_carbon_uptake_tc,
            metrics,
        }
    }
}

/// Number of cars whose yearly emissions match `co2_t`; 0 when the per-car figure is not positive
fn cars_equivalent(co2_t: f64, t_per_car_yr: f64) -> f64 {
    if t_per_car_yr > 0.0 {
        co2_t / t_per_car_yr
    } else {
        0.0
    }
}

/// Compute metrics with the standard conversion factors
pub fn compute(inputs: &InputParameters) -> OutputMetrics {
    BenefitCalculator::default().calculate(inputs)
}
