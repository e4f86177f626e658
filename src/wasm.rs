//! WASM bindings for in-browser conversion.
//!
//! Exposes the converter to JavaScript via wasm-bindgen; results cross the
//! boundary as JSON text ready for `convertFromRaw(JSON.parse(...))`.

use wasm_bindgen::prelude::*;

use crate::convert::{ConvertOptions, convert};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert HTML markup to Draft.js raw content JSON.
#[wasm_bindgen(js_name = htmlToDraftjs)]
pub fn html_to_draftjs(markup: &str, strict: bool) -> Result<String, JsValue> {
    let options = ConvertOptions::new().with_strict(strict);
    convert(markup, &options)
        .and_then(|doc| doc.to_json())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
