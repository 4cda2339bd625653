pub mod csv;

pub use crate::error::ExportError;
pub use csv::{append_summary, HeaderPolicy};
