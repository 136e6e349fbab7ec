//! Console commands for interactive mode

use crate::error::{CalculatorError, Result};
use crate::inputs::InputField;

pub const HELP: &str = "\
Commands:
  set <field> <value>   change one input and recompute
  reset [field]         restore defaults (all fields, or one)
  show                  print the results panel
  json                  print the current report as JSON
  fields                list input fields with their ranges
  help                  show this message
  quit | exit           leave";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Set(InputField, f64),
    Reset(Option<InputField>),
    Show,
    Json,
    Fields,
    Help,
    Quit,
}

impl Command {
    /// Parse one console line; blank lines give `Ok(None)`
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("set", [field, value]) => {
                let field: InputField = field.parse()?;
                let value: f64 = value.parse().map_err(|_| {
                    CalculatorError::InvalidCommand(format!("'{}' is not a number", value))
                })?;
                Command::Set(field, value)
            }
            ("reset", []) => Command::Reset(None),
            ("reset", [field]) => Command::Reset(Some(field.parse()?)),
            ("show", []) => Command::Show,
            ("json", []) => Command::Json,
            ("fields", []) => Command::Fields,
            ("help", []) | ("?", []) => Command::Help,
            ("quit", []) | ("exit", []) => Command::Quit,
            _ => return Err(CalculatorError::InvalidCommand(line.trim().to_string())),
        };

        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set() {
        assert_eq!(
            Command::parse("set mortality_percent 25").unwrap(),
            Some(Command::Set(InputField::MortalityPercent, 25.0))
        );
        assert_eq!(
            Command::parse("  SET area_acres 2.5e5  ").unwrap(),
            Some(Command::Set(InputField::AreaAcres, 250_000.0))
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("reset").unwrap(), Some(Command::Reset(None)));
        assert_eq!(
            Command::parse("reset scc_low_usd_per_tco2").unwrap(),
            Some(Command::Reset(Some(InputField::SccLow)))
        );
        assert_eq!(Command::parse("show").unwrap(), Some(Command::Show));
        assert_eq!(Command::parse("json").unwrap(), Some(Command::Json));
        assert_eq!(Command::parse("fields").unwrap(), Some(Command::Fields));
        assert_eq!(Command::parse("?").unwrap(), Some(Command::Help));
        assert_eq!(Command::parse("exit").unwrap(), Some(Command::Quit));
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Command::parse("set area_acres lots"), Err(CalculatorError::InvalidCommand(_))));
        assert!(matches!(Command::parse("set acreage 10"), Err(CalculatorError::UnknownField(_))));
        assert!(matches!(Command::parse("set area_acres"), Err(CalculatorError::InvalidCommand(_))));
        assert!(matches!(Command::parse("show me"), Err(CalculatorError::InvalidCommand(_))));
        assert!(matches!(Command::parse("plot"), Err(CalculatorError::InvalidCommand(_))));
    }
}
