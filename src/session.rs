use std::cell::RefCell;
use crate::api::Backend;
use crate::map::MapCanvas;
use crate::models::{CoordinateRegistry, RouteSelection};
use crate::route_controller::{RouteController, RouteDisplay, RouteStep};
use crate::traffic_monitor::{TrafficMonitor, TrafficStatus};

type Listener<T> = RefCell<Option<Box<dyn Fn(&T)>>>;

/// Everything the map page needs for its lifetime
///
/// The session owns the canvas, the junction registry, the backend and both
/// controllers. Route cycles (selection changes) and traffic cycles (timer ticks)
/// are spawned onto the single UI thread and interleave only at their network
/// await points; no `RefCell` borrow is held across an await.
pub struct MapSession<C, B> {
    canvas: RefCell<C>,
    registry: CoordinateRegistry,
    backend: B,
    route: RefCell<RouteController>,
    traffic: RefCell<TrafficMonitor>,
    on_route_display: Listener<RouteDisplay>,
    on_traffic_status: Listener<TrafficStatus>,
}

impl<C: MapCanvas, B: Backend> MapSession<C, B> {
    /// Place a marker for every registered junction and set up the traffic layer
    pub fn new(mut canvas: C, registry: CoordinateRegistry, backend: B) -> Self {
        for junction in registry.junctions() {
            canvas.add_marker(junction.coordinate, &junction.label());
        }
        let traffic = TrafficMonitor::new(&mut canvas);

        Self {
            canvas: RefCell::new(canvas),
            registry,
            backend,
            route: RefCell::new(RouteController::new()),
            traffic: RefCell::new(traffic),
            on_route_display: RefCell::new(None),
            on_traffic_status: RefCell::new(None),
        }
    }

    #[must_use]
    pub fn registry(&self) -> &CoordinateRegistry {
        &self.registry
    }

    #[must_use]
    pub fn route_display(&self) -> RouteDisplay {
        self.route.borrow().display().clone()
    }

    #[must_use]
    pub fn traffic_status(&self) -> Option<TrafficStatus> {
        self.traffic.borrow().status().cloned()
    }

    /// Called whenever the result text changes
    pub fn set_route_display_listener(&self, listener: impl Fn(&RouteDisplay) + 'static) {
        *self.on_route_display.borrow_mut() = Some(Box::new(listener));
    }

    /// Called after every applied traffic snapshot
    pub fn set_traffic_status_listener(&self, listener: impl Fn(&TrafficStatus) + 'static) {
        *self.on_traffic_status.borrow_mut() = Some(Box::new(listener));
    }

    /// Inspect the canvas
    pub fn with_canvas<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        f(&self.canvas.borrow())
    }

    /// Run one route cycle for a new selection
    pub async fn select_route(&self, selection: RouteSelection) {
        let step = self.route.borrow_mut().begin(&selection);
        let ticket = match step {
            RouteStep::Idle => return,
            RouteStep::Invalid => {
                self.notify_route_display();
                return;
            }
            RouteStep::Request(ticket) => ticket,
        };
        self.notify_route_display();

        let outcome = self.backend.fetch_route(&ticket.start, &ticket.end).await;

        let applied = {
            let mut canvas = self.canvas.borrow_mut();
            self.route
                .borrow_mut()
                .complete(&ticket, outcome, &mut *canvas, &self.registry)
        };
        if applied {
            self.notify_route_display();
        }
    }

    /// Run one traffic cycle
    pub async fn poll_traffic(&self) {
        let ticket = self.traffic.borrow_mut().begin_poll();

        let outcome = self.backend.fetch_traffic().await;

        let applied = {
            let route_overlay = self.route.borrow().overlay();
            let mut canvas = self.canvas.borrow_mut();
            self.traffic
                .borrow_mut()
                .complete(ticket, outcome, &mut *canvas, &self.registry, route_overlay)
        };
        if applied {
            if let (Some(listener), Some(status)) = (&*self.on_traffic_status.borrow(), self.traffic_status()) {
                listener(&status);
            }
        }
    }

    fn notify_route_display(&self) {
        let display = self.route_display();
        if let Some(listener) = &*self.on_route_display.borrow() {
            listener(&display);
        }
    }
}
