//! Calculator inputs: parameter set, widget bounds and CSV loading

mod data;
pub mod loader;

pub use data::{FieldBounds, InputField, InputParameters};
pub use loader::{load_inputs, load_inputs_from_reader, LabeledInputs};
