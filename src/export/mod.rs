pub mod csv;
pub mod json;

pub use crate::error::ExportError;
pub use csv::{export_plan_csv, export_units_csv};
pub use json::export_json;
