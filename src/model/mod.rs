pub mod distances;
pub mod layer;

pub use distances::{Distances, LayerRole, SummaryRow};
pub use layer::{Feature, Layer, LayerSource};
