//! Output structures for a benefit calculation

use serde::{Deserialize, Serialize};

/// Time framing of a result column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Horizon {
    /// Avoided carbon pulse from trees that would have died
    OneTime,
    /// Sequestration those trees keep providing each year
    Annual,
}

/// Low/high dollar value from the two social-cost-of-carbon bounds.
///
/// `low` is not guaranteed to be <= `high`; it follows whatever SCC bounds
/// were supplied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub low: f64,
    pub high: f64,
}

/// The eight derived metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutputMetrics {
    pub co2_avoided_one_time_t: f64,
    pub cars_equivalent_one_time: f64,
    pub co2_preserved_annual_t: f64,
    pub cars_equivalent_annual: f64,
    pub value_one_time_low_usd: f64,
    pub value_one_time_high_usd: f64,
    pub value_annual_low_usd: f64,
    pub value_annual_high_usd: f64,
}

impl OutputMetrics {
    /// CO2 tonnes for the horizon (one-time total, or tonnes per year)
    pub fn co2_t(&self, horizon: Horizon) -> f64 {
        match horizon {
            Horizon::OneTime => self.co2_avoided_one_time_t,
            Horizon::Annual => self.co2_preserved_annual_t,
        }
    }

    pub fn cars_equivalent(&self, horizon: Horizon) -> f64 {
        match horizon {
            Horizon::OneTime => self.cars_equivalent_one_time,
            Horizon::Annual => self.cars_equivalent_annual,
        }
    }

    pub fn value_range(&self, horizon: Horizon) -> ValueRange {
        match horizon {
            Horizon::OneTime => ValueRange {
                low: self.value_one_time_low_usd,
                high: self.value_one_time_high_usd,
            },
            Horizon::Annual => ValueRange {
                low: self.value_annual_low_usd,
                high: self.value_annual_high_usd,
            },
        }
    }

    /// All eight values in declaration order
    pub fn values(&self) -> [f64; 8] {
        [
            self.co2_avoided_one_time_t,
            self.cars_equivalent_one_time,
            self.co2_preserved_annual_t,
            self.cars_equivalent_annual,
            self.value_one_time_low_usd,
            self.value_one_time_high_usd,
            self.value_annual_low_usd,
            self.value_annual_high_usd,
        ]
    }
}

/// Intermediate quantities of the calculation alongside the final metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationBreakdown {
    pub area_ha: f64,
    pub mortality_frac: f64,
    /// t C that would have been lost with the dead trees
    pub carbon_lost_tc: f64,
    /// t C / yr those trees keep absorbing
    pub annual_carbon_uptake_tc: f64,
    pub metrics: OutputMetrics,
}
