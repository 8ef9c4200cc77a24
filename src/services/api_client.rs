// ============================================================================
// API CLIENT - HTTP communication only (stateless)
// ============================================================================
// No business logic here, just requests against the assistant backend
// ============================================================================

use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::chat::{BuildingInfoResponse, ChatRequest, ChatResponse};
use crate::models::geo::FeatureCollection;
use crate::models::route::{RouteRequest, RouteResult};

/// API client - HTTP communication only (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url().to_string(),
        }
    }

    /// Send a user message to the assistant
    pub async fn send_chat(&self, message: &str) -> Result<ChatResponse, String> {
        let url = format!("{}/api/chat", self.base_url);
        let request = ChatRequest {
            message: message.to_string(),
        };

        log::info!("💬 Sending message to assistant");

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Ask the backend to compute a route between two buildings
    pub async fn calculate_route(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<RouteResult, String> {
        let url = format!("{}/api/calcular-rota", self.base_url);
        let request = RouteRequest {
            origin: origin.to_string(),
            destination: destination.to_string(),
        };

        log::info!("🧭 Calculating route: {} → {}", origin, destination);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        let route = response
            .json::<RouteResult>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        log::info!("✅ Route received: {} points", route.path.len());

        Ok(route)
    }

    /// Fetch the campus building GeoJSON
    pub async fn fetch_geojson(&self) -> Result<FeatureCollection, String> {
        let url = format!("{}/api/geojson", self.base_url);

        log::info!("🗺️ Fetching campus GeoJSON");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        let collection = response
            .json::<FeatureCollection>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        log::info!("✅ GeoJSON loaded: {} features", collection.features.len());

        Ok(collection)
    }

    /// Fetch the formatted info text for one building
    pub async fn fetch_building_info(
        &self,
        reference: &str,
    ) -> Result<BuildingInfoResponse, String> {
        let url = format!("{}/api/predios/{}/info", self.base_url, reference);

        log::info!("🏢 Fetching info for building {}", reference);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json::<BuildingInfoResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
