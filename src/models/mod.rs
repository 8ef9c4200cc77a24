pub mod chat;
pub mod geo;
pub mod message;
pub mod route;

pub use chat::{BuildingInfoResponse, ChatRequest, ChatResponse};
pub use geo::{Feature, FeatureCollection, FeatureProperties, Geometry, LatLngBounds};
pub use message::{ChatMessage, Role};
pub use route::{RouteRequest, RouteResult};
