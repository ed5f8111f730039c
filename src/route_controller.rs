use crate::api::ApiError;
#[allow(unused_imports)]
use crate::logging::{log, log_error};
use crate::map::{LineStyle, MapCanvas, OverlayId};
use crate::models::{CoordinateRegistry, RouteResult, RouteSelection, SelectionCheck};

const SAME_ENDPOINTS_TEXT: &str = "Start and end points cannot be the same!";
const CALCULATING_TEXT: &str = "Calculating...";
const CALCULATING_TIME_TEXT: &str = "...";
const NO_TIME_TEXT: &str = "---";
const ROUTE_NOT_FOUND_TEXT: &str = "Could not find route";

/// Text shown in the result panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDisplay {
    pub path: String,
    pub time: String,
}

impl Default for RouteDisplay {
    fn default() -> Self {
        Self {
            path: "Select a start and end point".to_string(),
            time: NO_TIME_TEXT.to_string(),
        }
    }
}

/// A route request that has been issued; the response must be handed back with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTicket {
    generation: u64,
    pub start: String,
    pub end: String,
}

/// What the caller has to do after a selection change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteStep {
    /// Selection incomplete; nothing changes
    Idle,
    /// Start and end are the same junction; the conflict is already displayed
    Invalid,
    /// Fetch the route and pass the outcome to `RouteController::complete`
    Request(RouteTicket),
}

/// Owns the route overlay and the result text
///
/// Every selection that issues a request or shows a conflict starts a new
/// generation. A response is applied only if its ticket still carries the
/// current generation, so a slow response for an older selection never
/// overwrites a newer one.
#[derive(Debug, Default)]
pub struct RouteController {
    generation: u64,
    overlay: Option<OverlayId>,
    display: RouteDisplay,
}

impl RouteController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn display(&self) -> &RouteDisplay {
        &self.display
    }

    #[must_use]
    pub fn overlay(&self) -> Option<OverlayId> {
        self.overlay
    }

    /// React to a selection change
    ///
    /// An incomplete selection changes nothing, so a request still in flight
    /// stays current. Equal endpoints or a new request make it stale.
    /// An invalid selection keeps the existing overlay on the map.
    pub fn begin(&mut self, selection: &RouteSelection) -> RouteStep {
        match selection.check() {
            SelectionCheck::Incomplete => RouteStep::Idle,
            SelectionCheck::SameEndpoints => {
                self.generation += 1;
                self.set_display(SAME_ENDPOINTS_TEXT, NO_TIME_TEXT);
                RouteStep::Invalid
            }
            SelectionCheck::Ready { start, end } => {
                self.generation += 1;
                self.set_display(CALCULATING_TEXT, CALCULATING_TIME_TEXT);
                RouteStep::Request(RouteTicket {
                    generation: self.generation,
                    start: start.to_string(),
                    end: end.to_string(),
                })
            }
        }
    }

    #[must_use]
    pub fn is_current(&self, ticket: &RouteTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Apply the outcome of a request. Returns `false` if the ticket was stale and
    /// nothing changed.
    pub fn complete<C: MapCanvas>(
        &mut self,
        ticket: &RouteTicket,
        outcome: Result<RouteResult, ApiError>,
        canvas: &mut C,
        registry: &CoordinateRegistry,
    ) -> bool {
        if !self.is_current(ticket) {
            log!("Discarding stale route {} → {}", ticket.start, ticket.end);
            return false;
        }

        match outcome {
            Ok(route) => {
                self.display = RouteDisplay { path: route.path_text(), time: route.time_text() };
                self.draw(&route, canvas, registry);
                log!("Route {} → {}: {} junctions", ticket.start, ticket.end, route.path.len());
            }
            Err(error) => {
                log_error!("Error fetching route {} → {}: {error}", ticket.start, ticket.end);
                let reason = failure_reason(&error);
                self.set_display(&format!("Error: {reason}"), NO_TIME_TEXT);
            }
        }
        true
    }

    /// Replace the route overlay with a line through the resolvable path junctions
    fn draw<C: MapCanvas>(&mut self, route: &RouteResult, canvas: &mut C, registry: &CoordinateRegistry) {
        if let Some(previous) = self.overlay.take() {
            canvas.remove_line(previous);
        }

        let points = registry.resolve_all(&route.path);
        if points.len() < 2 {
            log!("Route has {} drawable junction(s), not drawing", points.len());
            return;
        }

        let id = canvas.add_line(&points, &LineStyle::route(), None);
        canvas.bring_to_front(id);
        canvas.fit_to_line(id);
        self.overlay = Some(id);
    }

    fn set_display(&mut self, path: &str, time: &str) {
        self.display = RouteDisplay { path: path.to_string(), time: time.to_string() };
    }
}

fn failure_reason(error: &ApiError) -> String {
    match error {
        ApiError::Backend { message: None, .. } => ROUTE_NOT_FOUND_TEXT.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_registry;
    use crate::map::MemoryCanvas;
    use crate::models::Coordinate;

    fn route(path: &[&str], time_minutes: f64) -> RouteResult {
        RouteResult { path: path.iter().map(ToString::to_string).collect(), time_minutes }
    }

    fn request(controller: &mut RouteController, start: &str, end: &str) -> RouteTicket {
        match controller.begin(&RouteSelection::between(start, end)) {
            RouteStep::Request(ticket) => ticket,
            other => panic!("expected a request, got {other:?}"),
        }
    }

    #[test]
    fn test_incomplete_selection_is_idle() {
        let mut controller = RouteController::new();
        let before = controller.display().clone();
        let step = controller.begin(&RouteSelection::new(Some("Hebbal".into()), None));
        assert_eq!(step, RouteStep::Idle);
        assert_eq!(controller.display(), &before);
    }

    #[test]
    fn test_calculating_placeholder() {
        let mut controller = RouteController::new();
        let ticket = request(&mut controller, "Hebbal", "Majestic");
        assert_eq!(ticket.start, "Hebbal");
        assert_eq!(ticket.end, "Majestic");
        assert_eq!(controller.display().path, "Calculating...");
        assert_eq!(controller.display().time, "...");
    }

    #[test]
    fn test_same_endpoints_keeps_overlay() {
        let registry = default_registry();
        let mut canvas = MemoryCanvas::new();
        let mut controller = RouteController::new();

        let ticket = request(&mut controller, "Koramangala", "Silk Board");
        controller.complete(&ticket, Ok(route(&["Koramangala", "Silk Board"], 10.0)), &mut canvas, &registry);
        let overlay = controller.overlay();
        assert!(overlay.is_some());

        let step = controller.begin(&RouteSelection::between("Hebbal", "Hebbal"));
        assert_eq!(step, RouteStep::Invalid);
        assert_eq!(controller.display().path, "Start and end points cannot be the same!");
        assert_eq!(controller.display().time, "---");
        assert_eq!(controller.overlay(), overlay);
        assert_eq!(canvas.lines().len(), 1);
    }

    #[test]
    fn test_success_draws_and_fits() {
        let registry = default_registry();
        let mut canvas = MemoryCanvas::new();
        let mut controller = RouteController::new();

        let ticket = request(&mut controller, "Koramangala", "Indiranagar");
        let applied = controller.complete(
            &ticket,
            Ok(route(&["Koramangala", "Silk Board", "Indiranagar"], 18.0)),
            &mut canvas,
            &registry,
        );

        assert!(applied);
        assert_eq!(controller.display().path, "Koramangala → Silk Board → Indiranagar");
        assert_eq!(controller.display().time, "18 minutes");

        let line = canvas.topmost().expect("route drawn");
        assert_eq!(Some(line.id), controller.overlay());
        assert_eq!(line.style, LineStyle::route());
        assert_eq!(line.points, vec![
            Coordinate::new(12.9357, 77.6245),
            Coordinate::new(12.9176, 77.6221),
            Coordinate::new(12.9719, 77.6411),
        ]);

        let viewport = canvas.viewport().expect("viewport fitted");
        assert_eq!(viewport.south_west, Coordinate::new(12.9176, 77.6221));
        assert_eq!(viewport.north_east, Coordinate::new(12.9719, 77.6411));
    }

    #[test]
    fn test_consecutive_successes_leave_one_overlay() {
        let registry = default_registry();
        let mut canvas = MemoryCanvas::new();
        let mut controller = RouteController::new();

        let first = request(&mut controller, "Koramangala", "Jayanagar");
        controller.complete(&first, Ok(route(&["Koramangala", "Jayanagar"], 20.0)), &mut canvas, &registry);
        let first_overlay = controller.overlay();

        let second = request(&mut controller, "Hebbal", "Majestic");
        controller.complete(
            &second,
            Ok(route(&["Hebbal", "Yeshwantpur", "Majestic"], 25.0)),
            &mut canvas,
            &registry,
        );

        assert_eq!(canvas.lines().len(), 1);
        assert_ne!(controller.overlay(), first_overlay);
        assert_eq!(canvas.lines()[0].points.len(), 3);
    }

    #[test]
    fn test_unknown_junction_draws_resolvable_subset() {
        let registry = default_registry();
        let mut canvas = MemoryCanvas::new();
        let mut controller = RouteController::new();

        let ticket = request(&mut controller, "Koramangala", "Indiranagar");
        controller.complete(
            &ticket,
            Ok(route(&["Koramangala", "Atlantis", "Indiranagar"], 30.0)),
            &mut canvas,
            &registry,
        );

        assert_eq!(controller.display().path, "Koramangala → Atlantis → Indiranagar");
        let line = canvas.topmost().expect("route drawn");
        assert_eq!(line.points.len(), 2);
    }

    #[test]
    fn test_unresolvable_route_clears_previous_line() {
        let registry = default_registry();
        let mut canvas = MemoryCanvas::new();
        let mut controller = RouteController::new();

        let ticket = request(&mut controller, "Koramangala", "Silk Board");
        controller.complete(&ticket, Ok(route(&["Koramangala", "Silk Board"], 10.0)), &mut canvas, &registry);

        let ticket = request(&mut controller, "Koramangala", "Atlantis");
        controller.complete(&ticket, Ok(route(&["Koramangala", "Atlantis"], 10.0)), &mut canvas, &registry);

        assert!(canvas.lines().is_empty());
        assert_eq!(controller.overlay(), None);
    }

    #[test]
    fn test_failure_keeps_overlay() {
        let registry = default_registry();
        let mut canvas = MemoryCanvas::new();
        let mut controller = RouteController::new();

        let ticket = request(&mut controller, "Koramangala", "Silk Board");
        controller.complete(&ticket, Ok(route(&["Koramangala", "Silk Board"], 10.0)), &mut canvas, &registry);
        let overlay = controller.overlay();

        let ticket = request(&mut controller, "Hebbal", "Whitefield");
        let error = ApiError::Backend { status: 404, message: Some("No path found from Hebbal to Whitefield".into()) };
        controller.complete(&ticket, Err(error), &mut canvas, &registry);

        assert_eq!(controller.display().path, "Error: No path found from Hebbal to Whitefield");
        assert_eq!(controller.display().time, "---");
        assert_eq!(controller.overlay(), overlay);
        assert_eq!(canvas.lines().len(), 1);
    }

    #[test]
    fn test_failure_reasons() {
        let registry = default_registry();
        let mut canvas = MemoryCanvas::new();
        let mut controller = RouteController::new();

        let ticket = request(&mut controller, "Hebbal", "Majestic");
        controller.complete(&ticket, Err(ApiError::Backend { status: 500, message: None }), &mut canvas, &registry);
        assert_eq!(controller.display().path, "Error: Could not find route");

        let ticket = request(&mut controller, "Hebbal", "Majestic");
        controller.complete(&ticket, Err(ApiError::Network("connection refused".into())), &mut canvas, &registry);
        assert_eq!(controller.display().path, "Error: Network error: connection refused");

        let ticket = request(&mut controller, "Hebbal", "Majestic");
        controller.complete(&ticket, Err(ApiError::Malformed("missing path".into())), &mut canvas, &registry);
        assert_eq!(controller.display().path, "Error: Unexpected response: missing path");
    }

    #[test]
    fn test_late_response_is_discarded() {
        let registry = default_registry();
        let mut canvas = MemoryCanvas::new();
        let mut controller = RouteController::new();

        let a = request(&mut controller, "Koramangala", "Jayanagar");
        let b = request(&mut controller, "Hebbal", "Majestic");

        assert!(controller.complete(
            &b,
            Ok(route(&["Hebbal", "Yeshwantpur", "Majestic"], 25.0)),
            &mut canvas,
            &registry,
        ));
        assert!(!controller.complete(&a, Ok(route(&["Koramangala", "Jayanagar"], 20.0)), &mut canvas, &registry));

        assert_eq!(controller.display().path, "Hebbal → Yeshwantpur → Majestic");
        assert_eq!(controller.display().time, "25 minutes");
        assert_eq!(canvas.lines().len(), 1);
        assert_eq!(canvas.lines()[0].points.len(), 3);
    }

    #[test]
    fn test_invalid_selection_supersedes_pending_request() {
        let registry = default_registry();
        let mut canvas = MemoryCanvas::new();
        let mut controller = RouteController::new();

        let pending = request(&mut controller, "Koramangala", "Jayanagar");
        controller.begin(&RouteSelection::between("Jayanagar", "Jayanagar"));

        assert!(!controller.complete(&pending, Ok(route(&["Koramangala", "Jayanagar"], 20.0)), &mut canvas, &registry));
        assert_eq!(controller.display().path, "Start and end points cannot be the same!");
        assert!(canvas.lines().is_empty());
    }

    #[test]
    fn test_incomplete_selection_keeps_pending_request() {
        let registry = default_registry();
        let mut canvas = MemoryCanvas::new();
        let mut controller = RouteController::new();

        let pending = request(&mut controller, "Koramangala", "Indiranagar");
        let step = controller.begin(&RouteSelection::new(None, Some("Indiranagar".into())));
        assert_eq!(step, RouteStep::Idle);
        assert!(controller.is_current(&pending));

        assert!(controller.complete(
            &pending,
            Ok(route(&["Koramangala", "Silk Board", "Indiranagar"], 18.0)),
            &mut canvas,
            &registry,
        ));
        assert_eq!(controller.display().path, "Koramangala → Silk Board → Indiranagar");
        assert_eq!(controller.display().time, "18 minutes");
        assert_eq!(canvas.lines().len(), 1);
    }
}
