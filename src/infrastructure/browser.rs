//! Thin wrappers over the browser APIs the dashboard touches.

use wasm_bindgen::JsValue;

/// Current `location.pathname`, `/` if it can't be read.
pub fn current_path() -> String {
    gloo::utils::window()
        .location()
        .pathname()
        .unwrap_or_else(|_| "/".to_string())
}

/// Push `path` onto the session history without reloading.
pub fn push_path(path: &str) -> Result<(), JsValue> {
    gloo::utils::history().push_state_with_url(&JsValue::NULL, "", Some(path))
}

/// `false` while the tab is in the background.
pub fn is_document_visible() -> bool {
    !gloo::utils::document().hidden()
}
