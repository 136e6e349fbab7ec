//! STS carbon benefits - forest carbon and social-cost value of preventing
//! spongy moth defoliation mortality
//!
//! This library provides:
//! - The benefit calculation (carbon pulse avoided, annual sink preserved,
//!   cars equivalent, social cost of carbon value ranges)
//! - Input widget bounds with clamping and strict validation
//! - Text, JSON and CSV presentation of results
//! - An interactive session that recomputes on every input change

pub mod error;
pub mod inputs;
pub mod calculator;
pub mod report;
pub mod session;

// Re-export commonly used types
pub use error::{CalculatorError, Result};
pub use inputs::{InputField, InputParameters};
pub use calculator::{compute, BenefitCalculator, OutputMetrics, Horizon};
pub use report::MetricsReport;
pub use session::CalculatorSession;
