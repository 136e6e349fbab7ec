//! Text and JSON rendering of the calculator screen

use super::format::{format_cars, format_co2, format_input, format_tonnes};
use crate::calculator::{CalculationBreakdown, Horizon, OutputMetrics};
use crate::inputs::{InputField, InputParameters};
use serde::Serialize;
use std::fmt;

pub const TITLE: &str = "Forest Carbon Benefits of Spongy Moth Management (STS)";

pub const INTRO: &str = "This simple calculator estimates the carbon and economic benefits of \
preventing spongy moth–induced tree mortality on forested land.";

pub const CAPTION: &str = "Note: This is a simple illustrative tool. Users should adjust carbon stock, \
sequestration rates, and mortality percentages based on local forest data and published literature.";

/// Formatted strings for one result column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDisplay {
    pub horizon: Horizon,
    pub heading: &'static str,
    pub co2_label: &'static str,
    pub co2: String,
    pub co2_tooltip: String,
    pub cars_label: &'static str,
    pub cars: String,
    pub scc_label: &'static str,
    pub scc_value: String,
}

impl ColumnDisplay {
    /// Build one column; both columns go through this so they can't drift apart.
    /// Each column shows its own SCC range: the one-time column carries the
    /// one-time value, where the original screen repeated the annual range.
    pub fn new(metrics: &OutputMetrics, horizon: Horizon) -> Self {
        let (heading, co2_label, cars_label, scc_label) = match horizon {
            Horizon::OneTime => (
                "One-time avoided carbon pulse (mortality)",
                "CO₂ avoided (one-time)",
                "Cars equivalent (one-time)",
                "One-time SCC value",
            ),
            Horizon::Annual => (
                "Preserved annual sink (ongoing)",
                "Annual CO₂ preserved",
                "Cars equivalent (annual)",
                "Annual SCC value",
            ),
        };

        let co2_t = metrics.co2_t(horizon);
        Self {
            horizon,
            heading,
            co2_label,
            co2: format_co2(co2_t, horizon),
            co2_tooltip: format_tonnes(co2_t, horizon),
            cars_label,
            cars: format_cars(metrics.cars_equivalent(horizon)),
            scc_label,
            scc_value: metrics.value_range(horizon).display(horizon),
        }
    }
}

/// Complete evaluation result: raw numbers plus display strings
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub inputs: InputParameters,
    pub breakdown: CalculationBreakdown,
    pub one_time: ColumnDisplay,
    pub annual: ColumnDisplay,
}

impl MetricsReport {
    pub fn new(inputs: InputParameters, breakdown: CalculationBreakdown) -> Self {
        Self {
            inputs,
            one_time: ColumnDisplay::new(&breakdown.metrics, Horizon::OneTime),
            annual: ColumnDisplay::new(&breakdown.metrics, Horizon::Annual),
            breakdown,
        }
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn panel(&self) -> ResultsPanel<'_> {
        ResultsPanel { report: self }
    }
}

/// Plain-text rendering of the whole screen
pub struct ResultsPanel<'a> {
    report: &'a MetricsReport,
}

impl fmt::Display for ResultsPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let divider = "-".repeat(72);

        writeln!(f, "{}", TITLE)?;
        writeln!(f, "{}", "=".repeat(TITLE.chars().count()))?;
        writeln!(f, "{}\n", INTRO)?;

        writeln!(f, "Inputs")?;
        for field in InputField::ALL {
            let value = format_input(self.report.inputs.get(field), field.bounds().decimals);
            writeln!(f, "  {:<44} {:>12}", field.label(), value)?;
        }
        writeln!(f, "{}", divider)?;

        writeln!(f, "Results")?;
        for column in [&self.report.one_time, &self.report.annual] {
            writeln!(f, "\n  {}", column.heading)?;
            writeln!(f, "    {:<28} {} ({})", column.co2_label, column.co2, column.co2_tooltip)?;
            writeln!(f, "    {:<28} {}", column.cars_label, column.cars)?;
            writeln!(f, "    {:<28} {}", column.scc_label, column.scc_value)?;
        }
        writeln!(f, "{}", divider)?;

        write!(f, "{}", CAPTION)
    }
}
