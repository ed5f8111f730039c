mod congestion;
mod junction;
mod registry;
mod road_segment;
mod route;

pub use congestion::CongestionLevel;
pub use junction::{Bounds, Coordinate, Junction};
pub use registry::CoordinateRegistry;
pub use road_segment::{RoadSegment, TrafficSnapshot};
pub use route::{RouteResult, RouteSelection, SelectionCheck};
