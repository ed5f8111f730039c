use leptos::{component, create_local_resource, view, IntoView, SignalGet, Suspense};
use leptos_meta::{provide_meta_context, Title};
use crate::components::map_view::MapView;
use crate::config::ClientConfig;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = create_local_resource(|| (), |()| ClientConfig::load());

    view! {
        <Title text="Bengaluru Live Traffic"/>

        <div class="app">
            <Suspense fallback=|| view! { <div class="loading">"Loading map..."</div> }>
                {move || config.get().map(|config| view! { <MapView config=config/> })}
            </Suspense>
        </div>
    }
}
