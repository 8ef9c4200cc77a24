/// Apology appended to the chat when a request fails outright
pub const ERROR_REPLY: &str =
    "Sorry, there was an error processing your request. Please try again.";

/// Canned prompt behind the "Campus Navigation" quick action
pub const QUICK_NAVIGATION_PROMPT: &str = "How do I get from building A to building B?";

/// Canned prompt behind the "Building Information" quick action
pub const QUICK_BUILDING_PROMPT: &str = "What's in building A?";

/// DOM id of the map container inside the modal
pub const MAP_CONTAINER_ID: &str = "campus-map";

/// Custom DOM event dispatched by the map glue when a building is clicked
pub const BUILDING_SELECTED_EVENT: &str = "buildingSelected";
