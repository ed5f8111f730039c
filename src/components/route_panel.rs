use leptos::{component, create_signal, event_target_value, view, Callable, Callback, CollectView, IntoView, ReadSignal, SignalGet, SignalGetUntracked, SignalSet};
use crate::models::RouteSelection;
use crate::route_controller::RouteDisplay;

fn junction_options(junctions: &[String]) -> impl IntoView {
    junctions
        .iter()
        .map(|id| {
            let label = id.replace('_', " ");
            view! { <option value=id.clone()>{label}</option> }
        })
        .collect_view()
}

/// Start/end pickers and the route result surfaces
#[component]
pub fn RoutePanel(
    junctions: Vec<String>,
    display: ReadSignal<RouteDisplay>,
    on_change: Callback<RouteSelection>,
) -> impl IntoView {
    let (start, set_start) = create_signal(String::new());
    let (end, set_end) = create_signal(String::new());

    let notify = move || {
        on_change.call(RouteSelection::new(Some(start.get_untracked()), Some(end.get_untracked())));
    };

    view! {
        <div class="route-panel">
            <h2>"Find the fastest route"</h2>
            <label class="route-field">
                <span>"Start"</span>
                <select
                    id="start-point"
                    on:change=move |ev| {
                        set_start.set(event_target_value(&ev));
                        notify();
                    }
                >
                    <option value="">"Select start"</option>
                    {junction_options(&junctions)}
                </select>
            </label>
            <label class="route-field">
                <span>"End"</span>
                <select
                    id="end-point"
                    on:change=move |ev| {
                        set_end.set(event_target_value(&ev));
                        notify();
                    }
                >
                    <option value="">"Select end"</option>
                    {junction_options(&junctions)}
                </select>
            </label>
            <div class="route-result">
                <p>
                    <strong>"Path: "</strong>
                    <span id="result-path">{move || display.get().path}</span>
                </p>
                <p>
                    <strong>"Time: "</strong>
                    <span id="result-time">{move || display.get().time}</span>
                </p>
            </div>
        </div>
    }
}
