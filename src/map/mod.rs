pub mod leaflet_ffi;
pub mod style;

pub use leaflet_ffi::*;
pub use style::{collection_styles, feature_style, FeatureStyle, RouteOverlay};
