use serde::{Deserialize, Serialize};

/// Request body for `POST /api/calcular-rota`
#[derive(Debug, Clone, Serialize)]
pub struct RouteRequest {
    #[serde(rename = "origem")]
    pub origin: String,
    #[serde(rename = "destino")]
    pub destination: String,
}

/// Route returned by the backend. `path` is a list of `[lat, lng]` pairs
/// ready for the polyline overlay. Replaced wholesale on every calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    #[serde(rename = "origem")]
    pub origin: String,
    #[serde(rename = "destino")]
    pub destination: String,
    #[serde(default)]
    pub path: Vec<[f64; 2]>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_route_result() {
        let json = r#"{
            "origem": "A",
            "destino": "D",
            "path": [[43.0125, -81.2002], [43.0130, -81.1990]]
        }"#;
        let route: RouteResult = serde_json::from_str(json).unwrap();
        assert_eq!(route.origin, "A");
        assert_eq!(route.destination, "D");
        assert_eq!(route.path.len(), 2);
        assert_eq!(route.path[0], [43.0125, -81.2002]);
    }

    #[test]
    fn missing_path_defaults_to_empty() {
        let route: RouteResult =
            serde_json::from_str(r#"{"origem": "A", "destino": "D"}"#).unwrap();
        assert!(route.path.is_empty());
    }

    #[test]
    fn route_request_uses_wire_field_names() {
        let request = RouteRequest {
            origin: "A".to_string(),
            destination: "D".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["origem"], "A");
        assert_eq!(json["destino"], "D");
    }
}
