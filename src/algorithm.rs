//! The "Append length to CSV" processing algorithm.

use crate::error::AlgorithmError;
use crate::export::{append_summary, HeaderPolicy};
use crate::measure::{DistanceArea, Ellipsoid, LengthUnit};
use crate::model::{Distances, Layer, LayerRole, LayerSource};
use crate::parser::{check_latitudes, load_layer};
use std::path::PathBuf;

/// Receives progress messages while the algorithm runs.
pub trait Feedback {
    fn push_info(&mut self, message: &str);
}

/// Forwards progress messages to `tracing` at info level.
#[derive(Debug, Default)]
pub struct TracingFeedback;

impl Feedback for TracingFeedback {
    fn push_info(&mut self, message: &str) {
        tracing::info!("{message}");
    }
}

/// Inputs of a single run.
#[derive(Debug, Clone)]
pub struct Parameters {
    pub total_added: LayerSource,
    pub total_modified: LayerSource,
    pub kaart_added: LayerSource,
    pub kaart_modified: LayerSource,
    pub country_name: String,
    pub output: PathBuf,
    pub ellipsoid: Ellipsoid,
    pub header: HeaderPolicy,
}

impl Parameters {
    #[must_use]
    pub fn source(&self, role: LayerRole) -> &LayerSource {
        match role {
            LayerRole::TotalAdded => &self.total_added,
            LayerRole::TotalModified => &self.total_modified,
            LayerRole::KaartAdded => &self.kaart_added,
            LayerRole::KaartModified => &self.kaart_modified,
        }
    }
}

/// Sums line lengths of four layers and appends them to a CSV summary.
#[derive(Debug, Clone)]
pub struct AppendLengthToCsv {
    parameters: Parameters,
}

impl AppendLengthToCsv {
    pub const NAME: &'static str = "appendlengthtocsv";
    pub const DISPLAY_NAME: &'static str = "Append length to CSV";
    pub const GROUP: &'static str = "PSQGIS";
    pub const GROUP_ID: &'static str = "vectoranalysis";
    pub const SHORT_HELP: &'static str =
        "Calculates the sum of line lengths in each of the input layers and appends to the given CSV";

    #[must_use]
    pub fn new(parameters: Parameters) -> Self {
        Self { parameters }
    }

    /// Runs the algorithm and returns the path of the CSV that was appended to.
    ///
    /// All four layers are loaded before anything is measured. If one cannot
    /// be loaded, or has latitudes outside [-90, 90] while measuring on an
    /// ellipsoid, the run stops with [`AlgorithmError::InvalidSource`] and the
    /// output file is left untouched.
    pub fn run(&self, feedback: &mut dyn Feedback) -> Result<PathBuf, AlgorithmError> {
        let measure = DistanceArea::new(self.parameters.ellipsoid);
        feedback.push_info(&format!("Length units are {}", measure.length_units()));

        let layers = self.resolve_sources()?;
        let distances = aggregate(&layers, &measure, feedback)?;

        let written = append_summary(
            &self.parameters.output,
            &self.parameters.country_name,
            &distances,
            self.parameters.header,
        )?;
        tracing::debug!(
            rows = written,
            path = %self.parameters.output.display(),
            "appended summary"
        );

        Ok(self.parameters.output.clone())
    }

    fn resolve_sources(&self) -> Result<Vec<(LayerRole, Layer)>, AlgorithmError> {
        let geographic = self.parameters.ellipsoid.parameters().is_some();
        LayerRole::ALL
            .into_iter()
            .map(|role| {
                let source = self.parameters.source(role);
                load_layer(&source.path)
                    .and_then(|layer| {
                        if geographic {
                            check_latitudes(&layer)?;
                        }
                        Ok((role, layer))
                    })
                    .map_err(|error| AlgorithmError::InvalidSource {
                        parameter: role.parameter(),
                        path: source.path.clone(),
                        source: error,
                    })
            })
            .collect()
    }
}

/// Measures every layer and rounds each sum to whole kilometres.
pub fn aggregate(
    layers: &[(LayerRole, Layer)],
    measure: &DistanceArea,
    feedback: &mut dyn Feedback,
) -> Result<Distances, AlgorithmError> {
    let mut distances = Distances::default();
    for (role, layer) in layers {
        let sum = sum_length(layer, measure);
        tracing::debug!(layer = %layer.name, features = layer.feature_count(), "measured layer");
        feedback.push_info(&format!("{} is {sum} {}.", role.key(), measure.length_units()));
        if !sum.is_finite() {
            return Err(AlgorithmError::NonFiniteLength {
                parameter: role.parameter(),
                length: sum,
            });
        }
        distances.set(*role, to_kilometres(sum, measure));
    }
    Ok(distances)
}

/// Sum of the measured length of every feature in `layer`.
#[must_use]
pub fn sum_length(layer: &Layer, measure: &DistanceArea) -> f64 {
    layer
        .features
        .iter()
        .map(|feature| measure.measure_length(&feature.geometry))
        .fold(0.0, |total, length| total + length)
}

/// Converts to kilometres and rounds half to even.
#[must_use]
pub fn to_kilometres(length: f64, measure: &DistanceArea) -> i64 {
    measure
        .convert_length_measurement(length, LengthUnit::Kilometers)
        .round_ties_even() as i64
}
