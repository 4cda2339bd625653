pub mod geojson;

pub use crate::error::LayerError;
pub use geojson::{check_latitudes, load_layer, parse_layer};
