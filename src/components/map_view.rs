use std::rc::Rc;
use std::time::Duration;
use gloo_timers::callback::Interval;
use leptos::{
    component, create_node_ref, create_signal, html, request_animation_frame, spawn_local,
    store_value, view, Callback, IntoView, SignalSet, WriteSignal,
};
use crate::api::HttpBackend;
use crate::components::{legend::Legend, route_panel::RoutePanel};
use crate::config::ClientConfig;
use crate::constants::MAP_ELEMENT_ID;
use crate::data::default_registry;
#[allow(unused_imports)]
use crate::logging::{log, log_error, log_warn};
use crate::map::{mount_canvas, PageCanvas};
use crate::models::{CoordinateRegistry, RouteSelection};
use crate::route_controller::RouteDisplay;
use crate::session::MapSession;
use crate::traffic_monitor::TrafficStatus;

type PageSession = MapSession<PageCanvas, HttpBackend>;

/// The map session as seen by the route panel while the page starts up
///
/// A selection made before the map is mounted is held (latest wins) and handed
/// back once the session exists.
#[derive(Debug)]
enum SessionSlot<S> {
    Starting { pending: Option<RouteSelection> },
    Ready(Rc<S>),
    Failed,
}

impl<S> Default for SessionSlot<S> {
    fn default() -> Self {
        Self::Starting { pending: None }
    }
}

impl<S> SessionSlot<S> {
    /// Returns the session to run `selection` on, or holds the selection until startup
    fn submit(&mut self, selection: RouteSelection) -> Option<(Rc<S>, RouteSelection)> {
        match self {
            Self::Ready(session) => Some((Rc::clone(session), selection)),
            Self::Starting { pending } => {
                log!("Map not ready, route will be calculated once it starts");
                *pending = Some(selection);
                None
            }
            Self::Failed => {
                log_warn!("Map failed to start, ignoring route selection");
                None
            }
        }
    }

    /// Store the started session and return the selection held during startup
    fn ready(&mut self, session: Rc<S>) -> Option<RouteSelection> {
        match std::mem::replace(self, Self::Ready(session)) {
            Self::Starting { pending } => pending,
            Self::Ready(_) | Self::Failed => None,
        }
    }

    fn fail(&mut self) {
        *self = Self::Failed;
    }
}

fn start_session(
    container: &web_sys::HtmlElement,
    config: &ClientConfig,
    registry: CoordinateRegistry,
    set_display: WriteSignal<RouteDisplay>,
    set_status: WriteSignal<Option<TrafficStatus>>,
) -> Result<Rc<PageSession>, String> {
    let canvas = mount_canvas(container, config)?;
    let session = MapSession::new(canvas, registry, HttpBackend::new(config.api_base.clone()));
    session.set_route_display_listener(move |display| set_display.set(display.clone()));
    session.set_traffic_status_listener(move |status| set_status.set(Some(status.clone())));
    log!("Map ready with {} junctions, backend {}", session.registry().len(), config.api_base);
    Ok(Rc::new(session))
}

/// Poll once now and then on every tick; dropping the interval stops polling
fn start_polling(session: &Rc<PageSession>, every: Duration) -> Interval {
    let first = Rc::clone(session);
    spawn_local(async move { first.poll_traffic().await });

    let session = Rc::clone(session);
    let millis = u32::try_from(every.as_millis()).unwrap_or(u32::MAX);
    Interval::new(millis, move || {
        let session = Rc::clone(&session);
        spawn_local(async move { session.poll_traffic().await });
    })
}

#[component]
pub fn MapView(config: ClientConfig) -> impl IntoView {
    let registry = default_registry();
    let junctions: Vec<String> = registry.ids().map(str::to_string).collect();

    let (display, set_display) = create_signal(RouteDisplay::default());
    let (traffic_status, set_traffic_status) = create_signal(None::<TrafficStatus>);
    let session = store_value(SessionSlot::<PageSession>::default());
    let poller = store_value(None::<Interval>);
    let map_ref = create_node_ref::<html::Div>();

    map_ref.on_load(move |container| {
        // Wait for the container to be attached and laid out before the map measures it
        request_animation_frame(move || {
            match start_session(&container, &config, registry, set_display, set_traffic_status) {
                Ok(started) => {
                    poller.set_value(Some(start_polling(&started, config.traffic_poll_interval())));
                    let mut held = None;
                    session.update_value(|slot| held = slot.ready(Rc::clone(&started)));
                    if let Some(selection) = held {
                        spawn_local(async move { started.select_route(selection).await });
                    }
                }
                Err(e) => {
                    log_error!("Failed to start map: {e}");
                    session.update_value(SessionSlot::fail);
                }
            }
        });
    });

    let on_change = Callback::new(move |selection: RouteSelection| {
        let mut ready = None;
        session.update_value(|slot| ready = slot.submit(selection));
        if let Some((session, selection)) = ready {
            spawn_local(async move { session.select_route(selection).await });
        }
    });

    view! {
        <div class="map-page">
            <div id=MAP_ELEMENT_ID class="map" node_ref=map_ref></div>
            <div class="sidebar">
                <RoutePanel junctions=junctions display=display on_change=on_change/>
                <Legend status=traffic_status/>
            </div>
        </div>
    }
}
