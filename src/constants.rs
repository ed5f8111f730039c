use std::time::Duration;

/// Default backend origin, matching the routing service's development address
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

/// Path of the route query endpoint, relative to the API base
pub const ROUTE_ENDPOINT: &str = "/api/get-route";

/// Path of the traffic snapshot endpoint, relative to the API base
pub const TRAFFIC_ENDPOINT: &str = "/api/get-all-traffic";

/// Runtime configuration document served next to the client
pub const CONFIG_PATH: &str = "/config.json";

/// How often live traffic is refreshed
pub const DEFAULT_TRAFFIC_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Initial map view (central Bengaluru)
pub const DEFAULT_MAP_CENTER: (f64, f64) = (12.9716, 77.5946);
pub const DEFAULT_MAP_ZOOM: f64 = 11.0;

pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Delay factor (live / base) at which a road turns from low to medium congestion
pub const MEDIUM_DELAY_FACTOR: f64 = 1.2;
/// Delay factor at which a road is considered heavily congested
pub const HIGH_DELAY_FACTOR: f64 = 1.8;

pub const ROUTE_COLOR: &str = "#007bff";
pub const ROUTE_WEIGHT: f64 = 6.0;
pub const ROUTE_OPACITY: f64 = 0.8;
pub const ROUTE_DASH: &str = "10, 10";

pub const TRAFFIC_WEIGHT: f64 = 4.0;
pub const TRAFFIC_OPACITY: f64 = 0.6;

/// DOM id of the element the map is mounted into
pub const MAP_ELEMENT_ID: &str = "map";
