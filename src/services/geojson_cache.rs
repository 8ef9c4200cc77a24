use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::geo::FeatureCollection;
use crate::utils::storage::{load_from_storage, remove_from_storage, save_to_storage};

const CACHE_KEY: &str = "campusNavigator_geojson_cache";
const CACHE_VERSION: u32 = 1;
const CACHE_TTL_HOURS: i64 = 24;

/// localStorage envelope for the campus GeoJSON. The collection itself is
/// read-only; the envelope only tracks freshness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoJsonCache {
    pub version: u32,
    pub collection: FeatureCollection,
    pub timestamp: DateTime<Utc>,
}

impl GeoJsonCache {
    pub fn new(collection: FeatureCollection) -> Self {
        Self {
            version: CACHE_VERSION,
            collection,
            timestamp: Utc::now(),
        }
    }

    /// Current version and younger than the TTL
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        if self.version != CACHE_VERSION {
            return false;
        }
        let age_hours = now.signed_duration_since(self.timestamp).num_hours();
        age_hours < CACHE_TTL_HOURS
    }

    /// Cached collection, when present and fresh
    pub fn load() -> Option<FeatureCollection> {
        let cache: GeoJsonCache = load_from_storage(CACHE_KEY)?;
        if cache.is_fresh(Utc::now()) {
            log::info!("🗺️ Using cached campus GeoJSON");
            Some(cache.collection)
        } else {
            log::info!("🗺️ GeoJSON cache expired, fetching fresh data");
            let _ = remove_from_storage(CACHE_KEY);
            None
        }
    }

    pub fn store(collection: &FeatureCollection) {
        let cache = GeoJsonCache::new(collection.clone());
        match save_to_storage(CACHE_KEY, &cache) {
            Ok(()) => log::info!("💾 Campus GeoJSON cached"),
            Err(e) => log::error!("❌ Could not cache GeoJSON: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn empty_collection() -> FeatureCollection {
        FeatureCollection {
            kind: "FeatureCollection".to_string(),
            features: Vec::new(),
        }
    }

    #[test]
    fn fresh_cache_is_served() {
        let cache = GeoJsonCache::new(empty_collection());
        assert!(cache.is_fresh(cache.timestamp + Duration::hours(1)));
    }

    #[test]
    fn stale_cache_is_rejected() {
        let cache = GeoJsonCache::new(empty_collection());
        assert!(!cache.is_fresh(cache.timestamp + Duration::hours(CACHE_TTL_HOURS)));
    }

    #[test]
    fn old_versions_are_rejected() {
        let mut cache = GeoJsonCache::new(empty_collection());
        cache.version = 0;
        assert!(!cache.is_fresh(cache.timestamp));
    }
}
