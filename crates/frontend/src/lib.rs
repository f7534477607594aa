pub mod app;
pub mod shared;

use contracts::shared::tabs::PanelId;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event};

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}

/// Handler for inline markup: `onclick="open_spv_tab(event, 'headers')"`.
///
/// The clicked element is `event.currentTarget`. Failures are thrown back to JS.
#[wasm_bindgen]
pub fn open_spv_tab(evt: Event, tab_name: &str) -> Result<(), JsValue> {
    let trigger = event_trigger(&evt)?;
    let config = shared::tabs::load_tabs_config();
    shared::tabs::open_tab(&config, &trigger, &PanelId::from(tab_name))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The element the handler is attached to (`event.currentTarget`).
pub fn event_trigger(evt: &Event) -> Result<Element, JsValue> {
    evt.current_target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .ok_or_else(|| JsValue::from_str("open_spv_tab: event has no element currentTarget"))
}
