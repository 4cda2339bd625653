//! # Road Length CSV
//!
//! Sums the geodesic length of road lines in four GeoJSON layers and appends
//! the totals, in whole kilometres, to a CSV summary.
//!
//! ## Features
//!
//! - Read GeoJSON `LineString` / `MultiLineString` layers
//! - Measure lengths on the GRS80 or WGS84 ellipsoid, or planar
//! - Append "added" and "edited or modified" rows per country
//! - Write the CSV header only when the file is empty
//!
//! ## Example
//!
//! ```no_run
//! use road_length_csv::algorithm::{AppendLengthToCsv, Parameters, TracingFeedback};
//! use road_length_csv::export::HeaderPolicy;
//! use road_length_csv::measure::Ellipsoid;
//! use road_length_csv::model::LayerSource;
//!
//! let algorithm = AppendLengthToCsv::new(Parameters {
//!     total_added: LayerSource::new("total_added.geojson"),
//!     total_modified: LayerSource::new("total_modified.geojson"),
//!     kaart_added: LayerSource::new("kaart_added.geojson"),
//!     kaart_modified: LayerSource::new("kaart_modified.geojson"),
//!     country_name: "Kenya".to_string(),
//!     output: "summary.csv".into(),
//!     ellipsoid: Ellipsoid::Grs80,
//!     header: HeaderPolicy::Auto,
//! });
//! let path = algorithm.run(&mut TracingFeedback).expect("Failed to append");
//! println!("Appended to {}", path.display());
//! ```

pub mod algorithm;
pub mod error;
pub mod export;
pub mod logging;
pub mod measure;
pub mod model;
pub mod parser;
