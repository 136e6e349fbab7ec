//! Carbon and social-cost benefit calculation

mod engine;
mod metrics;

pub use engine::{compute, BenefitCalculator, ConversionFactors, ACRE_TO_HECTARE, CARBON_TO_CO2};
pub use metrics::{CalculationBreakdown, Horizon, OutputMetrics, ValueRange};
