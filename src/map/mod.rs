//! Drawing surface the controllers render onto

#[cfg(target_arch = "wasm32")]
mod leaflet;
mod memory;

#[cfg(target_arch = "wasm32")]
pub use leaflet::LeafletCanvas;
pub use memory::{DrawnLine, MemoryCanvas};

use crate::config::ClientConfig;
use crate::constants::{
    ROUTE_COLOR, ROUTE_DASH, ROUTE_OPACITY, ROUTE_WEIGHT, TRAFFIC_OPACITY, TRAFFIC_WEIGHT,
};
use crate::models::{CongestionLevel, Coordinate};

/// Handle to a line drawn on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(pub u64);

/// Handle to a group of lines that can be cleared together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
    pub dash_array: Option<String>,
}

impl LineStyle {
    #[must_use]
    pub fn route() -> Self {
        Self {
            color: ROUTE_COLOR.to_string(),
            weight: ROUTE_WEIGHT,
            opacity: ROUTE_OPACITY,
            dash_array: Some(ROUTE_DASH.to_string()),
        }
    }

    #[must_use]
    pub fn traffic(level: CongestionLevel) -> Self {
        Self {
            color: level.color().to_string(),
            weight: TRAFFIC_WEIGHT,
            opacity: TRAFFIC_OPACITY,
            dash_array: None,
        }
    }
}

/// Map canvas operations used by the route and traffic controllers
///
/// Implementations are synchronous; every call takes effect before it returns.
/// Later-added lines render above earlier ones until `bring_to_front` reorders them.
pub trait MapCanvas {
    /// Place a point marker with a popup label
    fn add_marker(&mut self, at: Coordinate, label: &str);

    /// Draw a polyline, optionally as a member of a group
    fn add_line(&mut self, points: &[Coordinate], style: &LineStyle, group: Option<GroupId>) -> OverlayId;

    /// Remove a line; unknown ids are ignored
    fn remove_line(&mut self, id: OverlayId);

    /// Render a line above every other drawn element
    fn bring_to_front(&mut self, id: OverlayId);

    /// Adjust the viewport so the whole line is visible
    fn fit_to_line(&mut self, id: OverlayId);

    fn create_group(&mut self) -> GroupId;

    /// Remove every line belonging to the group
    fn clear_group(&mut self, group: GroupId);
}

/// Canvas used by the page: Leaflet in the browser, in-memory elsewhere
#[cfg(target_arch = "wasm32")]
pub type PageCanvas = LeafletCanvas;

#[cfg(not(target_arch = "wasm32"))]
pub type PageCanvas = MemoryCanvas;

/// Mount the page canvas into its container element
///
/// # Errors
///
/// Returns an error if the map library cannot create a map in the container
#[cfg(target_arch = "wasm32")]
pub fn mount_canvas(container: &web_sys::HtmlElement, config: &ClientConfig) -> Result<PageCanvas, String> {
    LeafletCanvas::mount(container, config)
}

/// Mount the page canvas into its container element
///
/// # Errors
///
/// Never fails outside the browser
#[cfg(not(target_arch = "wasm32"))]
pub fn mount_canvas(_container: &web_sys::HtmlElement, _config: &ClientConfig) -> Result<PageCanvas, String> {
    Ok(MemoryCanvas::new())
}
