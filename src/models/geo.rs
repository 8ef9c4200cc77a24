use serde::{Deserialize, Serialize};

/// `[[min_lat, min_lng], [max_lat, max_lng]]`, the shape Leaflet's
/// `fitBounds` expects.
pub type LatLngBounds = [[f64; 2]; 2];

/// Campus GeoJSON as served by `GET /api/geojson`. Read-only once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub properties: FeatureProperties,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

/// Known building properties; everything else is carried through `extra`
/// so re-serializing for the map glue loses nothing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "nome", skip_serializing_if = "Option::is_none")]
    pub local_name: Option<String>,
    #[serde(default, rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenity: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// GeoJSON coordinates are `[lng, lat]`; Leaflet wants `[lat, lng]`.
/// `positions()` does the swap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: [f64; 2] },
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<[f64; 2]>>> },
}

impl Geometry {
    /// All positions as `[lat, lng]`. Polygons contribute their exterior
    /// ring only, which is enough for bounds.
    pub fn positions(&self) -> Vec<[f64; 2]> {
        match self {
            Geometry::Point { coordinates } => vec![[coordinates[1], coordinates[0]]],
            Geometry::Polygon { coordinates } => coordinates
                .first()
                .map(|ring| ring.iter().map(|c| [c[1], c[0]]).collect())
                .unwrap_or_default(),
            Geometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .filter_map(|polygon| polygon.first())
                .flat_map(|ring| ring.iter().map(|c| [c[1], c[0]]))
                .collect(),
        }
    }
}

impl FeatureCollection {
    /// Bounding box over every feature with a geometry, or `None` when the
    /// collection has no positions at all.
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let mut bounds: Option<LatLngBounds> = None;

        for feature in &self.features {
            let Some(geometry) = &feature.geometry else {
                continue;
            };
            for [lat, lng] in geometry.positions() {
                bounds = Some(match bounds {
                    None => [[lat, lng], [lat, lng]],
                    Some([[min_lat, min_lng], [max_lat, max_lng]]) => [
                        [min_lat.min(lat), min_lng.min(lng)],
                        [max_lat.max(lat), max_lng.max(lng)],
                    ],
                });
            }
        }

        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campus() -> FeatureCollection {
        serde_json::from_str(
            r#"{
                "type": "FeatureCollection",
                "features": [
                    {
                        "type": "Feature",
                        "properties": {
                            "name": "Main Building",
                            "ref": "A",
                            "operator": "Fanshawe College",
                            "description": "Administration and Student Services"
                        },
                        "geometry": {
                            "type": "Point",
                            "coordinates": [-81.1996, 43.0126]
                        }
                    },
                    {
                        "type": "Feature",
                        "properties": {"nome": "Biblioteca", "ref": "D"},
                        "geometry": {
                            "type": "Polygon",
                            "coordinates": [[
                                [-81.2010, 43.0120],
                                [-81.2000, 43.0120],
                                [-81.2000, 43.0140],
                                [-81.2010, 43.0140],
                                [-81.2010, 43.0120]
                            ]]
                        }
                    },
                    {
                        "type": "Feature",
                        "properties": {"name": "Parking sign"},
                        "geometry": null
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn parses_point_and_polygon_features() {
        let collection = campus();
        assert_eq!(collection.kind, "FeatureCollection");
        assert_eq!(collection.features.len(), 3);

        let main = &collection.features[0];
        assert_eq!(main.properties.name.as_deref(), Some("Main Building"));
        assert_eq!(main.properties.reference.as_deref(), Some("A"));
        assert_eq!(
            main.properties.extra.get("description").and_then(|v| v.as_str()),
            Some("Administration and Student Services")
        );

        let library = &collection.features[1];
        assert_eq!(library.properties.local_name.as_deref(), Some("Biblioteca"));
        assert!(matches!(library.geometry, Some(Geometry::Polygon { .. })));
    }

    #[test]
    fn positions_swap_to_lat_lng() {
        let collection = campus();
        let point = collection.features[0].geometry.as_ref().unwrap();
        assert_eq!(point.positions(), vec![[43.0126, -81.1996]]);
    }

    #[test]
    fn bounds_cover_all_geometries_and_skip_missing_ones() {
        let bounds = campus().bounds().unwrap();
        assert_eq!(bounds, [[43.0120, -81.2010], [43.0140, -81.1996]]);
    }

    #[test]
    fn empty_collection_has_no_bounds() {
        let collection = FeatureCollection {
            kind: "FeatureCollection".to_string(),
            features: Vec::new(),
        };
        assert_eq!(collection.bounds(), None);
    }

    #[test]
    fn serializing_keeps_the_wire_shape() {
        let collection = campus();
        let json = serde_json::to_value(&collection).unwrap();
        assert_eq!(json["type"], "FeatureCollection");
        assert_eq!(json["features"][0]["geometry"]["type"], "Point");
        assert_eq!(json["features"][0]["properties"]["ref"], "A");
        assert_eq!(json["features"][1]["properties"]["nome"], "Biblioteca");
    }
}
