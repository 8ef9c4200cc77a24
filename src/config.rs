use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub map_config: MapConfig,
    pub ui_config: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:8000".to_string(),
            backend_url_production: "https://api.campusnavigator.app".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            map_config: MapConfig::default(),
            ui_config: UiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center_lat: 43.0125,
            default_center_lng: -81.2002,
            default_zoom: 16.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub route_line_color: String,
    pub route_line_width: u32,
    pub route_line_opacity: f64,
    pub fit_bounds_padding: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            route_line_color: "#3498db".to_string(),
            route_line_width: 4,
            route_line_opacity: 0.8,
            fit_bounds_padding: 50,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:8000").to_string(),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .unwrap_or("https://api.campusnavigator.app").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            map_config: MapConfig {
                default_center_lat: option_env!("DEFAULT_MAP_CENTER_LAT")
                    .unwrap_or("43.0125").parse().unwrap_or(43.0125),
                default_center_lng: option_env!("DEFAULT_MAP_CENTER_LNG")
                    .unwrap_or("-81.2002").parse().unwrap_or(-81.2002),
                default_zoom: option_env!("DEFAULT_MAP_ZOOM")
                    .unwrap_or("16.0").parse().unwrap_or(16.0),
            },
            ui_config: UiConfig {
                route_line_color: option_env!("ROUTE_LINE_COLOR")
                    .unwrap_or("#3498db").to_string(),
                route_line_width: option_env!("ROUTE_LINE_WIDTH")
                    .unwrap_or("4").parse().unwrap_or(4),
                route_line_opacity: option_env!("ROUTE_LINE_OPACITY")
                    .unwrap_or("0.8").parse().unwrap_or(0.8),
                fit_bounds_padding: option_env!("FIT_BOUNDS_PADDING")
                    .unwrap_or("50").parse().unwrap_or(50),
            },
        }
    }

    /// Backend URL for the current environment
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Global static configuration
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_follows_environment() {
        let mut config = AppConfig::default();
        assert_eq!(config.backend_url(), "http://localhost:8000");

        config.environment = "production".to_string();
        assert_eq!(config.backend_url(), "https://api.campusnavigator.app");
    }
}
