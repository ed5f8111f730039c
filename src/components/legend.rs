use leptos::{component, view, CollectView, IntoView, ReadSignal, SignalWith};
use crate::models::CongestionLevel;
use crate::traffic_monitor::TrafficStatus;

/// Congestion colour key and the time of the last traffic refresh
#[component]
pub fn Legend(status: ReadSignal<Option<TrafficStatus>>) -> impl IntoView {
    let items = CongestionLevel::ALL
        .iter()
        .map(|level| {
            let swatch = format!("background: {};", level.color());
            view! {
                <div class="legend-item">
                    <span class="legend-swatch" style=swatch></span>
                    <span>{level.label()}</span>
                </div>
            }
        })
        .collect_view();

    let updated = move || {
        status.with(|status| match status {
            Some(s) => format!(
                "Traffic updated {} ({} roads)",
                s.updated_at.format("%H:%M:%S"),
                s.drawn_segments
            ),
            None => "Waiting for live traffic...".to_string(),
        })
    };

    view! {
        <div class="legend">
            <h3>"Live traffic"</h3>
            <div class="legend-items">{items}</div>
            <p class="legend-description">{updated}</p>
        </div>
    }
}
