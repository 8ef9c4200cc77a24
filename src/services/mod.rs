pub mod api_client;
pub mod geojson_cache;

pub use api_client::ApiClient;
pub use geojson_cache::GeoJsonCache;
