//! WASM bindings for running the engine in a browser.
//!
//! Exposes one-shot HTML transforms plus a stateful [`WasmPage`] that
//! answers the same JSON messages as [`Page::handle_json`].

use wasm_bindgen::prelude::*;

use crate::bionic::EmphasisMode;
use crate::page::Page;
use crate::preview::render_preview;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Parse a mode coming from JavaScript. `undefined` means Auto.
fn mode_from_js(bold_count: Option<String>) -> Result<EmphasisMode, JsValue> {
    match bold_count {
        Some(s) => s.parse().map_err(to_js),
        None => Ok(EmphasisMode::Auto),
    }
}

/// Emphasize an HTML document.
///
/// `bold_count` is `"auto"` or a character count; omitted means auto.
#[wasm_bindgen]
pub fn bionic_html(html: &str, bold_count: Option<String>) -> Result<String, JsValue> {
    let mut page = Page::parse(html);
    page.set_mode(mode_from_js(bold_count)?);
    page.apply();
    page.to_html().map_err(to_js)
}

/// Strip emphasis previously added by [`bionic_html`].
#[wasm_bindgen]
pub fn revert_html(html: &str) -> Result<String, JsValue> {
    let mut page = Page::parse(html);
    page.revert();
    page.to_html().map_err(to_js)
}

/// Preview sentence for the settings panel.
#[wasm_bindgen]
pub fn preview_html(bold_count: Option<String>) -> Result<String, JsValue> {
    Ok(render_preview(mode_from_js(bold_count)?))
}

/// A page kept alive across messages.
#[wasm_bindgen]
pub struct WasmPage {
    page: Page,
}

#[wasm_bindgen]
impl WasmPage {
    #[wasm_bindgen(constructor)]
    pub fn new(html: &str) -> WasmPage {
        WasmPage {
            page: Page::parse(html),
        }
    }

    /// Handle one JSON request and return the JSON response.
    #[wasm_bindgen(js_name = handleMessage)]
    pub fn handle_message(&mut self, request: &str) -> Result<String, JsValue> {
        self.page.handle_json(request).map_err(to_js)
    }

    #[wasm_bindgen(getter, js_name = isApplied)]
    pub fn is_applied(&self) -> bool {
        self.page.is_applied()
    }

    /// Current page HTML.
    pub fn html(&self) -> Result<String, JsValue> {
        self.page.to_html().map_err(to_js)
    }
}
