//! Error types for road-length-csv.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading a line layer.
#[derive(Debug, Error)]
pub enum LayerError {
    /// Failed to read the layer file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid GeoJSON.
    #[error("invalid GeoJSON: {source}")]
    InvalidGeoJson {
        #[from]
        source: serde_json::Error,
    },

    /// A feature carries a geometry that is not a line.
    #[error("feature {index} has unsupported geometry type '{geometry_type}', expected a line")]
    UnsupportedGeometry {
        index: usize,
        geometry_type: String,
    },

    /// A position has fewer than two ordinates.
    #[error("feature {index} has a position with {len} ordinate(s)")]
    InvalidCoordinate { index: usize, len: usize },

    /// A latitude outside [-90, 90] in a layer measured on an ellipsoid.
    #[error("feature {index} has latitude {latitude}, outside [-90, 90]")]
    LatitudeOutOfRange { index: usize, latitude: f64 },
}

/// Errors that can occur when appending the summary CSV.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to open the output file for appending.
    #[error("failed to open file '{path}': {source}")]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file opened but its length could not be read.
    #[error("failed to read size of file '{path}': {source}")]
    FileInspect {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}

/// Errors returned by [`crate::algorithm::AppendLengthToCsv::run`].
#[derive(Debug, Error)]
pub enum AlgorithmError {
    /// An input layer could not be resolved. Nothing has been measured or written.
    #[error("could not load source layer for {parameter}: invalid value '{path}'")]
    InvalidSource {
        parameter: &'static str,
        path: PathBuf,
        source: LayerError,
    },

    /// A layer's summed length overflowed or is not a number.
    #[error("length of {parameter} is not finite: {length}")]
    NonFiniteLength { parameter: &'static str, length: f64 },

    /// Writing the summary failed.
    #[error(transparent)]
    Export(#[from] ExportError),
}
