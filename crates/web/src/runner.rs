//! Browser entry point.
//!
//! Runs when the wasm module is instantiated. Load the module as
//! `<script type="module">` so the document is parsed by then.

use wasm_bindgen::prelude::*;

use crate::application::initialize;
use crate::infrastructure::platform::WasmPage;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("Starting skill sheet field widgets");

    let page = WasmPage::current().map_err(to_js)?;
    let config = page.widget_config().map_err(to_js)?;
    initialize(&page, &config).map_err(to_js)?;
    Ok(())
}

fn to_js(err: crate::error::WidgetError) -> JsValue {
    tracing::error!("Field widget setup failed: {}", err);
    JsValue::from_str(&err.to_string())
}
