//! Interactive form state and batch evaluation
//!
//! The session holds the current inputs the way a form does: any change
//! replaces the whole parameter set and triggers exactly one recalculation.

mod command;

pub use command::{Command, HELP};

use crate::calculator::{BenefitCalculator, CalculationBreakdown, OutputMetrics};
use crate::error::Result;
use crate::inputs::{InputField, InputParameters};
use crate::report::MetricsReport;
use rayon::prelude::*;
use std::fmt;

/// How out-of-range values are handled before calculating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPolicy {
    /// Pull values into the widget range, like a bounded number input
    #[default]
    Clamp,
    /// Reject values outside the widget range
    Strict,
}

impl InputPolicy {
    /// Apply the policy to a full parameter set
    pub fn apply(&self, inputs: &InputParameters) -> Result<InputParameters> {
        match self {
            InputPolicy::Clamp => Ok(inputs.clamped()?.0),
            InputPolicy::Strict => {
                inputs.validate()?;
                Ok(*inputs)
            }
        }
    }
}

/// Current form state plus the metrics computed from it
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    calculator: BenefitCalculator,
    policy: InputPolicy,
    inputs: InputParameters,
    breakdown: CalculationBreakdown,
    evaluations: u64,
}

impl CalculatorSession {
    /// Session at the recommended defaults
    pub fn new() -> Self {
        Self::with_policy(InputPolicy::Clamp)
    }

    pub fn with_policy(policy: InputPolicy) -> Self {
        let calculator = BenefitCalculator::default();
        let inputs = InputParameters::default();
        Self {
            calculator,
            policy,
            breakdown: calculator.calculate_detailed(&inputs),
            inputs,
            evaluations: 1,
        }
    }

    /// Session starting from caller-supplied inputs
    pub fn from_inputs(inputs: InputParameters, policy: InputPolicy) -> Result<Self> {
        let calculator = BenefitCalculator::default();
        let accepted = policy.apply(&inputs)?;
        Ok(Self {
            calculator,
            policy,
            breakdown: calculator.calculate_detailed(&accepted),
            inputs: accepted,
            evaluations: 1,
        })
    }

    pub fn inputs(&self) -> &InputParameters {
        &self.inputs
    }

    pub fn metrics(&self) -> &OutputMetrics {
        &self.breakdown.metrics
    }

    pub fn breakdown(&self) -> &CalculationBreakdown {
        &self.breakdown
    }

    /// Number of calculations run so far, including the initial one
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    pub fn report(&self) -> MetricsReport {
        MetricsReport::new(self.inputs, self.breakdown)
    }

    /// Replace all inputs and recompute.
    ///
    /// On error the previous inputs and metrics are kept.
    pub fn replace(&mut self, inputs: InputParameters) -> Result<&OutputMetrics> {
        let accepted = self.policy.apply(&inputs)?;
        self.inputs = accepted;
        self.breakdown = self.calculator.calculate_detailed(&accepted);
        self.evaluations += 1;

        log::debug!(
            "evaluation {}: co2_one_time={:.3} t, co2_annual={:.3} t/yr",
            self.evaluations,
            self.breakdown.metrics.co2_avoided_one_time_t,
            self.breakdown.metrics.co2_preserved_annual_t,
        );

        Ok(&self.breakdown.metrics)
    }

    /// Change one field and recompute
    pub fn set(&mut self, field: InputField, value: f64) -> Result<&OutputMetrics> {
        self.replace(self.inputs.with(field, value))
    }

    /// Change one field and report the value actually stored
    pub fn apply_set(&mut self, field: InputField, value: f64) -> Result<SetOutcome> {
        self.set(field, value)?;
        Ok(SetOutcome {
            field,
            requested: value,
            stored: self.inputs.get(field),
        })
    }

    /// Restore every field to its default
    pub fn reset(&mut self) -> &OutputMetrics {
        self.inputs = InputParameters::default();
        self.breakdown = self.calculator.calculate_detailed(&self.inputs);
        self.evaluations += 1;
        &self.breakdown.metrics
    }

    /// Restore one field to its default
    pub fn reset_field(&mut self, field: InputField) -> Result<&OutputMetrics> {
        self.set(field, field.bounds().default)
    }
}

/// Result of a single-field change, after clamping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetOutcome {
    pub field: InputField,
    pub requested: f64,
    pub stored: f64,
}

impl SetOutcome {
    pub fn was_clamped(&self) -> bool {
        self.stored != self.requested
    }
}

impl fmt::Display for SetOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.field, self.stored)?;
        if self.was_clamped() {
            write!(f, " (clamped from {})", self.requested)?;
        }
        Ok(())
    }
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate independent parameter sets in parallel, preserving order
pub fn evaluate_batch(inputs: &[InputParameters]) -> Vec<CalculationBreakdown> {
    let calculator = BenefitCalculator::default();
    log::info!("evaluating {} parameter sets", inputs.len());
    inputs
        .par_iter()
        .map(|p| calculator.calculate_detailed(p))
        .collect()
}
