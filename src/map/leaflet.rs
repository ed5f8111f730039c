use std::collections::HashMap;
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;
use super::{GroupId, LineStyle, MapCanvas, OverlayId};
use crate::config::ClientConfig;
use crate::models::Coordinate;

// Leaflet is loaded by the host page and exposed as the global `L`
#[wasm_bindgen]
extern "C" {
    type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn leaflet_map(container: &web_sys::HtmlElement) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &Array, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds(this: &LeafletMap, bounds: &JsValue) -> LeafletMap;

    type Layer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L)]
    fn marker(at: &Array) -> Layer;

    #[wasm_bindgen(js_namespace = L)]
    fn polyline(points: &Array, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    fn layer_group() -> Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, target: &JsValue) -> Layer;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Layer, content: &str) -> Layer;

    #[wasm_bindgen(method)]
    fn remove(this: &Layer) -> Layer;

    #[wasm_bindgen(method, js_name = bringToFront)]
    fn bring_to_front(this: &Layer) -> Layer;

    #[wasm_bindgen(method, js_name = getBounds)]
    fn get_bounds(this: &Layer) -> JsValue;

    #[wasm_bindgen(method, js_name = clearLayers)]
    fn clear_layers(this: &Layer) -> Layer;
}

/// `MapCanvas` backed by a Leaflet map mounted into a DOM element
pub struct LeafletCanvas {
    map: LeafletMap,
    lines: HashMap<OverlayId, (Layer, Option<GroupId>)>,
    groups: HashMap<GroupId, Layer>,
    next_id: u64,
}

impl LeafletCanvas {
    /// Create the map inside `container`, centre it and add the tile layer
    ///
    /// # Errors
    ///
    /// Returns an error if Leaflet is not loaded or the element cannot host a map
    pub fn mount(container: &web_sys::HtmlElement, config: &ClientConfig) -> Result<Self, String> {
        let leaflet_loaded = Reflect::has(&js_sys::global(), &JsValue::from_str("L")).unwrap_or(false);
        if !leaflet_loaded {
            return Err("Leaflet (global `L`) is not loaded".to_string());
        }

        let map = leaflet_map(container).map_err(|e| format!("Failed to create map: {e:?}"))?;
        map.set_view(&lat_lng(config.map_center.into()), config.map_zoom);

        let tile_options = options(&[("attribution", JsValue::from_str(&config.tile_attribution))]);
        tile_layer(&config.tile_url, &tile_options).add_to(&map);

        Ok(Self { map, lines: HashMap::new(), groups: HashMap::new(), next_id: 0 })
    }

    /// Lines currently on the map, in creation order
    #[must_use]
    pub fn line_ids(&self) -> Vec<OverlayId> {
        let mut ids: Vec<_> = self.lines.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl MapCanvas for LeafletCanvas {
    fn add_marker(&mut self, at: Coordinate, label: &str) {
        marker(&lat_lng(at)).add_to(&self.map).bind_popup(label);
    }

    fn add_line(&mut self, points: &[Coordinate], style: &LineStyle, group: Option<GroupId>) -> OverlayId {
        let latlngs: Array = points.iter().map(|p| JsValue::from(lat_lng(*p))).collect();
        let layer = polyline(&latlngs, &line_options(style));
        match group.and_then(|g| self.groups.get(&g)) {
            Some(group_layer) => layer.add_to(group_layer),
            None => layer.add_to(&self.map),
        };

        let id = OverlayId(self.allocate_id());
        self.lines.insert(id, (layer, group));
        id
    }

    fn remove_line(&mut self, id: OverlayId) {
        if let Some((layer, _)) = self.lines.remove(&id) {
            layer.remove();
        }
    }

    fn bring_to_front(&mut self, id: OverlayId) {
        if let Some((layer, _)) = self.lines.get(&id) {
            layer.bring_to_front();
        }
    }

    fn fit_to_line(&mut self, id: OverlayId) {
        if let Some((layer, _)) = self.lines.get(&id) {
            self.map.fit_bounds(&layer.get_bounds());
        }
    }

    fn create_group(&mut self) -> GroupId {
        let id = GroupId(self.allocate_id());
        let group = layer_group();
        group.add_to(&self.map);
        self.groups.insert(id, group);
        id
    }

    fn clear_group(&mut self, group: GroupId) {
        if let Some(group_layer) = self.groups.get(&group) {
            group_layer.clear_layers();
        }
        self.lines.retain(|_, (_, member_of)| *member_of != Some(group));
    }
}

fn lat_lng(at: Coordinate) -> Array {
    Array::of2(&JsValue::from_f64(at.lat), &JsValue::from_f64(at.lng))
}

fn line_options(style: &LineStyle) -> JsValue {
    let mut pairs = vec![
        ("color", JsValue::from_str(&style.color)),
        ("weight", JsValue::from_f64(style.weight)),
        ("opacity", JsValue::from_f64(style.opacity)),
    ];
    if let Some(dash) = &style.dash_array {
        pairs.push(("dashArray", JsValue::from_str(dash)));
    }
    options(&pairs)
}

fn options(pairs: &[(&str, JsValue)]) -> JsValue {
    let object = Object::new();
    for (key, value) in pairs {
        // Setting a property on a fresh plain object cannot fail
        let _ = Reflect::set(&object, &JsValue::from_str(key), value);
    }
    object.into()
}
