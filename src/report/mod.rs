//! Presentation of calculator results as text, JSON and CSV

mod batch;
mod format;
mod panel;

pub use batch::write_batch_csv;
pub use format::{format_cars, format_co2, format_input, format_kilotonnes, format_megatonnes, format_thousands, format_tonnes};
pub use panel::{ColumnDisplay, MetricsReport, ResultsPanel, CAPTION, INTRO, TITLE};
