use serde::Serialize;

use crate::config::CONFIG;
use crate::models::{FeatureCollection, FeatureProperties, RouteResult};

// Campus palette
const COLLEGE_STROKE: &str = "#667eea";
const COLLEGE_FILL: &str = "#764ba2";
const OTHER_STROKE: &str = "#95a5a6";
const OTHER_FILL: &str = "#bdc3c7";
const ORIGIN_FILL: &str = "#27ae60";
const DESTINATION_FILL: &str = "#e74c3c";

// College buildings are tagged this way in the campus GeoJSON export
const CAMPUS_OPERATOR: &str = "Fanshawe College";
const CAMPUS_NAME_MARKER: &str = "Fanshawe";

/// Leaflet path options for one feature, camelCase on the wire
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureStyle {
    pub color: String,
    pub weight: u32,
    #[serde(rename = "fillColor")]
    pub fill_color: String,
    #[serde(rename = "fillOpacity")]
    pub fill_opacity: f64,
}

impl FeatureStyle {
    fn college() -> Self {
        Self {
            color: COLLEGE_STROKE.to_string(),
            weight: 3,
            fill_color: COLLEGE_FILL.to_string(),
            fill_opacity: 0.3,
        }
    }

    fn other() -> Self {
        Self {
            color: OTHER_STROKE.to_string(),
            weight: 2,
            fill_color: OTHER_FILL.to_string(),
            fill_opacity: 0.1,
        }
    }
}

fn is_college_building(props: &FeatureProperties) -> bool {
    props.operator.as_deref() == Some(CAMPUS_OPERATOR)
        || props
            .name
            .as_deref()
            .is_some_and(|name| name.contains(CAMPUS_NAME_MARKER))
        || props.amenity.as_deref() == Some("college")
        || props.reference.is_some()
}

/// Style for one feature. Route endpoints override the base style: origin is
/// painted green, destination red, both at full prominence.
pub fn feature_style(props: &FeatureProperties, route: Option<&RouteResult>) -> FeatureStyle {
    let mut style = if is_college_building(props) {
        FeatureStyle::college()
    } else {
        FeatureStyle::other()
    };

    if let (Some(route), Some(reference)) = (route, props.reference.as_deref()) {
        if reference == route.origin {
            style.fill_color = ORIGIN_FILL.to_string();
            style.fill_opacity = 0.7;
            style.weight = 4;
        } else if reference == route.destination {
            style.fill_color = DESTINATION_FILL.to_string();
            style.fill_opacity = 0.7;
            style.weight = 4;
        }
    }

    style
}

/// Styles aligned index-by-index with `collection.features`, ready to hand
/// to the map glue alongside the collection itself.
pub fn collection_styles(
    collection: &FeatureCollection,
    route: Option<&RouteResult>,
) -> Vec<FeatureStyle> {
    collection
        .features
        .iter()
        .map(|feature| feature_style(&feature.properties, route))
        .collect()
}

/// Route polyline payload for the map glue
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteOverlay {
    pub path: Vec<[f64; 2]>,
    pub color: String,
    pub weight: u32,
    pub opacity: f64,
}

impl RouteOverlay {
    pub fn from_route(route: &RouteResult) -> Self {
        Self {
            path: route.path.clone(),
            color: CONFIG.ui_config.route_line_color.clone(),
            weight: CONFIG.ui_config.route_line_width,
            opacity: CONFIG.ui_config.route_line_opacity,
        }
    }
}
