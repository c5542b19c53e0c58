//! Theme input: the page shell owns the toggle UI and the stored
//! preference; the animation core only reads the current dark/light
//! state.

use web_sys as web;

const STORAGE_KEY: &str = "theme";

/// Read the current theme: the `data-theme` attribute on the document
/// element wins, then the persisted preference, then light.
pub fn is_dark_mode() -> bool {
    if let Some(doc) = web::window().and_then(|w| w.document()) {
        if let Some(root) = doc.document_element() {
            if let Some(theme) = root.get_attribute("data-theme") {
                return theme == "dark";
            }
        }
    }
    stored_preference().map(|t| t == "dark").unwrap_or(false)
}

fn stored_preference() -> Option<String> {
    local_storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
}

fn local_storage() -> Option<web::Storage> {
    web::window().and_then(|w| w.local_storage().ok().flatten())
}
