use geo::MultiLineString;
use std::path::{Path, PathBuf};

/// A single line record. A feature without geometry has no member lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub geometry: MultiLineString<f64>,
}

impl Feature {
    #[must_use]
    pub fn new(geometry: MultiLineString<f64>) -> Self {
        Self { geometry }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            geometry: MultiLineString::new(Vec::new()),
        }
    }
}

/// A named collection of line features.
#[derive(Debug, Clone)]
pub struct Layer {
    pub name: String,
    pub features: Vec<Feature>,
}

impl Layer {
    #[must_use]
    pub fn new(name: String, features: Vec<Feature>) -> Self {
        Self { name, features }
    }

    #[must_use]
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }
}

/// Reference to a layer that has not been loaded yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerSource {
    pub path: PathBuf,
}

impl LayerSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}
