//! Input parameter set and per-field widget bounds

use crate::error::{CalculatorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the seven user-supplied inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    AreaAcres,
    MortalityPercent,
    CarbonStock,
    SequestrationRate,
    SccLow,
    SccHigh,
    CarEmissions,
}

impl InputField {
    /// All fields in form order (left column, then right column)
    pub const ALL: [InputField; 7] = [
        InputField::AreaAcres,
        InputField::MortalityPercent,
        InputField::CarbonStock,
        InputField::SequestrationRate,
        InputField::SccLow,
        InputField::SccHigh,
        InputField::CarEmissions,
    ];

    /// Machine-readable key, also used as the CSV column name
    pub fn key(&self) -> &'static str {
        match self {
            InputField::AreaAcres => "area_acres",
            InputField::MortalityPercent => "mortality_percent",
            InputField::CarbonStock => "carbon_stock_t_per_ha",
            InputField::SequestrationRate => "sequestration_rate_t_per_ha_yr",
            InputField::SccLow => "scc_low_usd_per_tco2",
            InputField::SccHigh => "scc_high_usd_per_tco2",
            InputField::CarEmissions => "car_emissions_t_per_car_yr",
        }
    }

    /// Human-readable widget label
    pub fn label(&self) -> &'static str {
        match self {
            InputField::AreaAcres => "Area protected (acres)",
            InputField::MortalityPercent => "Defoliation-induced mortality avoided (%)",
            InputField::CarbonStock => "Aboveground carbon stock (t C / ha)",
            InputField::SequestrationRate => "Annual net sequestration (t C / ha / yr)",
            InputField::SccLow => "Social Cost of Carbon – low ($ / t CO₂)",
            InputField::SccHigh => "Social Cost of Carbon – high ($ / t CO₂)",
            InputField::CarEmissions => "Average car emissions (t CO₂ / car / yr)",
        }
    }

    pub fn bounds(&self) -> FieldBounds {
        match self {
            InputField::AreaAcres => FieldBounds::new(1.0, None, 1000.0, 100_000.0, 0),
            InputField::MortalityPercent => FieldBounds::new(1.0, Some(90.0), 1.0, 10.0, 0),
            InputField::CarbonStock => FieldBounds::new(10.0, Some(300.0), 5.0, 50.0, 2),
            InputField::SequestrationRate => FieldBounds::new(0.1, Some(3.0), 0.1, 0.5, 2),
            InputField::SccLow => FieldBounds::new(0.0, Some(500.0), 1.0, 51.0, 2),
            InputField::SccHigh => FieldBounds::new(0.0, Some(500.0), 1.0, 190.0, 2),
            InputField::CarEmissions => FieldBounds::new(1.0, Some(10.0), 0.1, 4.6, 2),
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for InputField {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        InputField::ALL
            .iter()
            .copied()
            .find(|field| field.key() == wanted)
            .ok_or_else(|| CalculatorError::UnknownField(s.trim().to_string()))
    }
}

/// Range, step and default of a numeric input widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    pub min: f64,
    /// None = unbounded above (area)
    pub max: Option<f64>,
    pub step: f64,
    pub default: f64,
    /// Decimal places shown when echoing the value back
    pub decimals: usize,
}

impl FieldBounds {
    pub const fn new(min: f64, max: Option<f64>, step: f64, default: f64, decimals: usize) -> Self {
        Self { min, max, step, default, decimals }
    }

    /// Upper bound as a float (infinity when unbounded)
    pub fn max_or_inf(&self) -> f64 {
        self.max.unwrap_or(f64::INFINITY)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max_or_inf()
    }

    /// Clamp a finite value into [min, max]
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max_or_inf())
    }
}

/// The seven validated scalar inputs to the benefit calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputParameters {
    pub area_acres: f64,
    pub mortality_percent: f64,
    pub carbon_stock_t_per_ha: f64,
    pub sequestration_rate_t_per_ha_yr: f64,
    pub scc_low_usd_per_tco2: f64,
    pub scc_high_usd_per_tco2: f64,
    pub car_emissions_t_per_car_yr: f64,
}

impl Default for InputParameters {
    fn default() -> Self {
        Self {
            area_acres: InputField::AreaAcres.bounds().default,
            mortality_percent: InputField::MortalityPercent.bounds().default,
            carbon_stock_t_per_ha: InputField::CarbonStock.bounds().default,
            sequestration_rate_t_per_ha_yr: InputField::SequestrationRate.bounds().default,
            scc_low_usd_per_tco2: InputField::SccLow.bounds().default,
            scc_high_usd_per_tco2: InputField::SccHigh.bounds().default,
            car_emissions_t_per_car_yr: InputField::CarEmissions.bounds().default,
        }
    }
}

impl InputParameters {
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::AreaAcres => self.area_acres,
            InputField::MortalityPercent => self.mortality_percent,
            InputField::CarbonStock => self.carbon_stock_t_per_ha,
            InputField::SequestrationRate => self.sequestration_rate_t_per_ha_yr,
            InputField::SccLow => self.scc_low_usd_per_tco2,
            InputField::SccHigh => self.scc_high_usd_per_tco2,
            InputField::CarEmissions => self.car_emissions_t_per_car_yr,
        }
    }

    /// Copy of these parameters with one field replaced
    pub fn with(mut self, field: InputField, value: f64) -> Self {
        let slot = match field {
            InputField::AreaAcres => &mut self.area_acres,
            InputField::MortalityPercent => &mut self.mortality_percent,
            InputField::CarbonStock => &mut self.carbon_stock_t_per_ha,
            InputField::SequestrationRate => &mut self.sequestration_rate_t_per_ha_yr,
            InputField::SccLow => &mut self.scc_low_usd_per_tco2,
            InputField::SccHigh => &mut self.scc_high_usd_per_tco2,
            InputField::CarEmissions => &mut self.car_emissions_t_per_car_yr,
        };
        *slot = value;
        self
    }

    /// Clamp every field into its widget range.
    ///
    /// Returns the adjusted parameters together with the fields that moved.
    /// Non-finite values are an error rather than being clamped.
    pub fn clamped(&self) -> Result<(Self, Vec<InputField>)> {
        let mut out = *self;
        let mut adjusted = Vec::new();

        for field in InputField::ALL {
            let value = self.get(field);
            if !value.is_finite() {
                return Err(CalculatorError::NotFinite { field: field.key(), value });
            }
            let bounded = field.bounds().clamp(value);
            if bounded != value {
                log::warn!("{} = {} clamped to {}", field, value, bounded);
                out = out.with(field, bounded);
                adjusted.push(field);
            }
        }

        Ok((out, adjusted))
    }

    /// Strict range check; SCC low/high ordering is deliberately not checked
    pub fn validate(&self) -> Result<()> {
        for field in InputField::ALL {
            let value = self.get(field);
            if !value.is_finite() {
                return Err(CalculatorError::NotFinite { field: field.key(), value });
            }
            let bounds = field.bounds();
            if !bounds.contains(value) {
                return Err(CalculatorError::OutOfRange {
                    field: field.key(),
                    value,
                    min: bounds.min,
                    max: bounds.max_or_inf(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_widgets() {
        let p = InputParameters::default();
        assert_eq!(p.area_acres, 100_000.0);
        assert_eq!(p.mortality_percent, 10.0);
        assert_eq!(p.carbon_stock_t_per_ha, 50.0);
        assert_eq!(p.sequestration_rate_t_per_ha_yr, 0.5);
        assert_eq!(p.scc_low_usd_per_tco2, 51.0);
        assert_eq!(p.scc_high_usd_per_tco2, 190.0);
        assert_eq!(p.car_emissions_t_per_car_yr, 4.6);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_field_lookup_by_key() {
        assert_eq!("area_acres".parse::<InputField>().unwrap(), InputField::AreaAcres);
        assert_eq!(" SCC_HIGH_USD_PER_TCO2 ".parse::<InputField>().unwrap(), InputField::SccHigh);
        assert!(matches!(
            "acreage".parse::<InputField>(),
            Err(CalculatorError::UnknownField(name)) if name == "acreage"
        ));
    }

    #[test]
    fn test_with_replaces_single_field() {
        let p = InputParameters::default().with(InputField::CarbonStock, 120.0);
        assert_eq!(p.carbon_stock_t_per_ha, 120.0);
        assert_eq!(p.area_acres, 100_000.0);
        for field in InputField::ALL {
            let q = InputParameters::default().with(field, 7.0);
            assert_eq!(q.get(field), 7.0);
        }
    }

    #[test]
    fn test_clamping() {
        let p = InputParameters::default()
            .with(InputField::MortalityPercent, 95.0)
            .with(InputField::AreaAcres, 0.0)
            .with(InputField::SequestrationRate, 1.2);

        let (clamped, adjusted) = p.clamped().unwrap();
        assert_eq!(clamped.mortality_percent, 90.0);
        assert_eq!(clamped.area_acres, 1.0);
        assert_eq!(clamped.sequestration_rate_t_per_ha_yr, 1.2);
        assert_eq!(adjusted, vec![InputField::AreaAcres, InputField::MortalityPercent]);
    }

    #[test]
    fn test_area_has_no_upper_bound() {
        let p = InputParameters::default().with(InputField::AreaAcres, 5.0e9);
        let (clamped, adjusted) = p.clamped().unwrap();
        assert_eq!(clamped.area_acres, 5.0e9);
        assert!(adjusted.is_empty());
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_non_finite_rejected() {
        let p = InputParameters::default().with(InputField::SccLow, f64::NAN);
        assert!(matches!(p.clamped(), Err(CalculatorError::NotFinite { field: "scc_low_usd_per_tco2", .. })));
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_validate_reports_first_offender() {
        let p = InputParameters::default().with(InputField::CarEmissions, 0.0);
        match p.validate() {
            Err(CalculatorError::OutOfRange { field, value, min, max }) => {
                assert_eq!(field, "car_emissions_t_per_car_yr");
                assert_eq!(value, 0.0);
                assert_eq!(min, 1.0);
                assert_eq!(max, 10.0);
            }
            other => panic!("expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_inverted_scc_is_valid() {
        let p = InputParameters::default()
            .with(InputField::SccLow, 300.0)
            .with(InputField::SccHigh, 20.0);
        assert!(p.validate().is_ok());
    }
}
