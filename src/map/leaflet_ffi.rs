// ============================================================================
// LEAFLET FFI - Foreign Function Interface to the JavaScript map glue
// ============================================================================
// Thin wrappers over JS functions - no state, no logic
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = initCampusMap)]
    pub fn init_campus_map(container_id: &str, center_lat: f64, center_lng: f64, zoom: f64);

    #[wasm_bindgen(js_name = setCampusGeoJson)]
    pub fn set_campus_geojson(geojson_json: &str, styles_json: &str);

    #[wasm_bindgen(js_name = drawRoute)]
    pub fn draw_route(overlay_json: &str);

    #[wasm_bindgen(js_name = clearRoute)]
    pub fn clear_route();

    #[wasm_bindgen(js_name = fitMapBounds)]
    pub fn fit_map_bounds(bounds_json: &str, padding: u32);

    #[wasm_bindgen(js_name = destroyCampusMap)]
    pub fn destroy_campus_map();
}

/// Helper: ask the glue to recompute tile layout once the modal is visible
pub fn invalidate_map_size() {
    if let Some(window) = web_sys::window() {
        let function = js_sys::Function::new_no_args(
            "if (window.invalidateCampusMapSize) window.invalidateCampusMapSize();",
        );
        let _ = function.call0(&window.into());
    }
}
