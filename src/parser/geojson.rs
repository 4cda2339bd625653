use crate::error::LayerError;
use crate::model::{Feature, Layer};
use geo::{Coord, LineString, MultiLineString};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Top-level GeoJSON object. Only the members we read are declared.
#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(rename = "type")]
    kind: String,
    name: Option<String>,
    features: Option<Vec<RawFeature>>,
    geometry: Option<RawGeometry>,
    coordinates: Option<Value>,
    geometries: Option<Vec<RawGeometry>>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    geometry: Option<RawGeometry>,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    coordinates: Option<Value>,
    geometries: Option<Vec<RawGeometry>>,
}

/// Reads a GeoJSON line layer from disk.
///
/// Accepts a `FeatureCollection`, a single `Feature` or a bare geometry.
/// Line geometries (`LineString`, `MultiLineString` and collections of them)
/// are read; anything else is rejected. The layer is named after the
/// collection's `name` member, falling back to the file stem.
///
/// # Errors
///
/// Returns [`LayerError::FileRead`] if the file cannot be read, and the
/// errors of [`parse_layer`] if its content is not a line layer.
///
/// # Example
///
/// ```no_run
/// use road_length_csv::parser::load_layer;
///
/// let layer = load_layer("roads_added.geojson")?;
/// println!("{}: {} features", layer.name, layer.feature_count());
/// # Ok::<(), road_length_csv::error::LayerError>(())
/// ```
pub fn load_layer<P: AsRef<Path>>(path: P) -> Result<Layer, LayerError> {
    let content = std::fs::read_to_string(&path).map_err(|source| LayerError::FileRead {
        path: path.as_ref().to_path_buf(),
        source,
    })?;

    let fallback = path
        .as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "layer".to_string());

    parse_layer(&content, &fallback)
}

/// Parses GeoJSON text into a [`Layer`].
pub fn parse_layer(content: &str, fallback_name: &str) -> Result<Layer, LayerError> {
    let document: RawDocument = serde_json::from_str(content)?;

    let name = document
        .name
        .clone()
        .unwrap_or_else(|| fallback_name.to_string());

    let features = match document.kind.as_str() {
        "FeatureCollection" => document
            .features
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, feature)| convert_feature(index, feature.geometry))
            .collect::<Result<Vec<_>, _>>()?,
        "Feature" => vec![convert_feature(0, document.geometry)?],
        _ => {
            let geometry = RawGeometry {
                kind: document.kind,
                coordinates: document.coordinates,
                geometries: document.geometries,
            };
            vec![convert_feature(0, Some(geometry))?]
        }
    };

    Ok(Layer::new(name, features))
}

/// Rejects any vertex whose latitude lies outside [-90, 90].
///
/// Geodesic measurement reads `y` as latitude; out-of-range values would
/// otherwise measure as zero.
pub fn check_latitudes(layer: &Layer) -> Result<(), LayerError> {
    for (index, feature) in layer.features.iter().enumerate() {
        let outside = feature
            .geometry
            .iter()
            .flat_map(|line| line.coords())
            .find(|coord| coord.y.abs() > 90.0);
        if let Some(coord) = outside {
            return Err(LayerError::LatitudeOutOfRange {
                index,
                latitude: coord.y,
            });
        }
    }
    Ok(())
}

fn convert_feature(index: usize, geometry: Option<RawGeometry>) -> Result<Feature, LayerError> {
    match geometry {
        Some(geometry) => {
            let lines = collect_lines(index, geometry)?;
            Ok(Feature::new(MultiLineString::new(lines)))
        }
        None => Ok(Feature::empty()),
    }
}

fn collect_lines(index: usize, geometry: RawGeometry) -> Result<Vec<LineString<f64>>, LayerError> {
    match geometry.kind.as_str() {
        "LineString" => {
            let positions: Vec<Vec<f64>> = coordinates(geometry.coordinates)?;
            Ok(vec![to_line(index, positions)?])
        }
        "MultiLineString" => {
            let lines: Vec<Vec<Vec<f64>>> = coordinates(geometry.coordinates)?;
            lines
                .into_iter()
                .map(|positions| to_line(index, positions))
                .collect()
        }
        "GeometryCollection" => {
            let mut lines = Vec::new();
            for member in geometry.geometries.unwrap_or_default() {
                lines.extend(collect_lines(index, member)?);
            }
            Ok(lines)
        }
        other => Err(LayerError::UnsupportedGeometry {
            index,
            geometry_type: other.to_string(),
        }),
    }
}

fn coordinates<T: serde::de::DeserializeOwned + Default>(
    value: Option<Value>,
) -> Result<T, LayerError> {
    match value {
        Some(value) => Ok(serde_json::from_value(value)?),
        None => Ok(T::default()),
    }
}

fn to_line(index: usize, positions: Vec<Vec<f64>>) -> Result<LineString<f64>, LayerError> {
    positions
        .into_iter()
        .map(|position| match position.as_slice() {
            [x, y, ..] => Ok(Coord { x: *x, y: *y }),
            _ => Err(LayerError::InvalidCoordinate {
                index,
                len: position.len(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(LineString::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reads_feature_collection_with_mixed_lines() {
        let content = r#"{
            "type": "FeatureCollection",
            "name": "roads",
            "features": [
                {"type": "Feature", "properties": {"id": 1},
                 "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 0.0, 12.5]]}},
                {"type": "Feature", "properties": {},
                 "geometry": {"type": "MultiLineString",
                              "coordinates": [[[0.0, 0.0], [0.0, 1.0]], [[1.0, 1.0], [2.0, 1.0]]]}},
                {"type": "Feature", "properties": {}, "geometry": null}
            ]
        }"#;

        let layer = parse_layer(content, "fallback").unwrap();

        assert_eq!(layer.name, "roads");
        assert_eq!(layer.feature_count(), 3);
        assert_eq!(layer.features[0].geometry.0.len(), 1);
        assert_eq!(
            layer.features[0].geometry.0[0].0[1],
            Coord { x: 1.0, y: 0.0 }
        );
        assert_eq!(layer.features[1].geometry.0.len(), 2);
        assert!(layer.features[2].geometry.0.is_empty());
    }

    #[test]
    fn empty_collection_uses_fallback_name() {
        let layer = parse_layer(r#"{"type": "FeatureCollection", "features": []}"#, "kaart").unwrap();
        assert_eq!(layer.name, "kaart");
        assert_eq!(layer.feature_count(), 0);
    }

    #[test]
    fn bare_geometry_becomes_one_feature() {
        let layer = parse_layer(
            r#"{"type": "LineString", "coordinates": [[5.0, 52.0], [5.1, 52.0]]}"#,
            "line",
        )
        .unwrap();
        assert_eq!(layer.feature_count(), 1);
    }

    #[test]
    fn rejects_polygons() {
        let content = r#"{"type": "Feature", "properties": {},
            "geometry": {"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]]}}"#;

        let err = parse_layer(content, "x").unwrap_err();
        assert!(matches!(
            err,
            LayerError::UnsupportedGeometry { index: 0, ref geometry_type } if geometry_type == "Polygon"
        ));
    }

    #[test]
    fn rejects_short_positions() {
        let content = r#"{"type": "LineString", "coordinates": [[0.0], [1.0, 2.0]]}"#;
        let err = parse_layer(content, "x").unwrap_err();
        assert!(matches!(err, LayerError::InvalidCoordinate { len: 1, .. }));
    }

    #[test]
    fn latitude_beyond_pole_is_rejected() {
        let content = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "properties": {},
             "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [0.0, 89.5]]}},
            {"type": "Feature", "properties": {},
             "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [0.0, 95.0]]}}
        ]}"#;
        let layer = parse_layer(content, "x").unwrap();

        let err = check_latitudes(&layer).unwrap_err();
        assert!(matches!(
            err,
            LayerError::LatitudeOutOfRange { index: 1, latitude } if latitude == 95.0
        ));
    }

    #[test]
    fn poles_are_valid_latitudes() {
        let content = r#"{"type": "LineString", "coordinates": [[0.0, -90.0], [0.0, 90.0]]}"#;
        let layer = parse_layer(content, "x").unwrap();
        assert!(check_latitudes(&layer).is_ok());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_layer("{ not json", "x").unwrap_err();
        assert!(matches!(err, LayerError::InvalidGeoJson { .. }));
    }
}
