//! Display formatting for metric values

use crate::calculator::{Horizon, ValueRange};

/// Round to a whole number and group digits with commas: 1234567.8 -> "1,234,568"
pub fn format_thousands(value: f64) -> String {
    let rounded = format!("{:.0}", value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}", sign, grouped)
}

/// Input value at the widget's display precision, or in full when that
/// precision would hide part of it
pub fn format_input(value: f64, decimals: usize) -> String {
    let shown = format!("{:.*}", decimals, value);
    match shown.parse::<f64>() {
        Ok(parsed) if parsed == value => shown,
        _ => format!("{}", value),
    }
}

/// Tonnes shown as megatonnes, 3 decimals
pub fn format_megatonnes(tonnes: f64) -> String {
    format!("{:.3} Mt CO₂", tonnes / 1e6)
}

/// Tonnes per year shown as kilotonnes per year, 1 decimal
pub fn format_kilotonnes(tonnes_per_year: f64) -> String {
    format!("{:.1} kt CO₂ / yr", tonnes_per_year / 1e3)
}

/// Full-precision tonnes for the metric tooltip
pub fn format_tonnes(tonnes: f64, horizon: Horizon) -> String {
    match horizon {
        Horizon::OneTime => format!("{} t CO₂", format_thousands(tonnes)),
        Horizon::Annual => format!("{} t CO₂ / yr", format_thousands(tonnes)),
    }
}

/// Headline CO2 figure for a result column
pub fn format_co2(tonnes: f64, horizon: Horizon) -> String {
    match horizon {
        Horizon::OneTime => format_megatonnes(tonnes),
        Horizon::Annual => format_kilotonnes(tonnes),
    }
}

pub fn format_cars(cars: f64) -> String {
    format!("{} cars · year⁻¹", format_thousands(cars))
}

impl ValueRange {
    /// "$low – $high", with " per year" appended for the annual horizon
    pub fn display(&self, horizon: Horizon) -> String {
        let range = format!("${} – ${}", format_thousands(self.low), format_thousands(self.high));
        match horizon {
            Horizon::OneTime => range,
            Horizon::Annual => format!("{} per year", range),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.4), "999");
        assert_eq!(format_thousands(999.6), "1,000");
        assert_eq!(format_thousands(161_302.418), "161,302");
        assert_eq!(format_thousands(37_841_547.375), "37,841,547");
        assert_eq!(format_thousands(-1_234_567.0), "-1,234,567");
    }

    #[test]
    fn test_input_precision() {
        assert_eq!(format_input(100_000.0, 0), "100000");
        assert_eq!(format_input(37.5, 0), "37.5");
        assert_eq!(format_input(4.6, 2), "4.60");
        assert_eq!(format_input(0.125, 2), "0.125");
    }

    #[test]
    fn test_co2_units() {
        assert_eq!(format_megatonnes(741_991.125), "0.742 Mt CO₂");
        assert_eq!(format_kilotonnes(7_419.91125), "7.4 kt CO₂ / yr");
        assert_eq!(format_tonnes(741_991.125, Horizon::OneTime), "741,991 t CO₂");
        assert_eq!(format_tonnes(7_419.91125, Horizon::Annual), "7,420 t CO₂ / yr");
    }

    #[test]
    fn test_cars() {
        assert_eq!(format_cars(1_613.024), "1,613 cars · year⁻¹");
    }

    #[test]
    fn test_value_range_by_horizon() {
        let range = ValueRange { low: 378_415.47, high: 1_409_783.14 };
        assert_eq!(range.display(Horizon::Annual), "$378,415 – $1,409,783 per year");
        assert_eq!(range.display(Horizon::OneTime), "$378,415 – $1,409,783");
    }
}
