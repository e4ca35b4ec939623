use gloo::storage::{LocalStorage, Storage};
use shared::SessionStore;
use tracing::warn;

/// `localStorage`-backed session store. Values are kept as raw strings, not
/// JSON-encoded, so the token reads back exactly as the API issued it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserStore;

impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match LocalStorage::raw().get_item(key) {
            Ok(value) => value,
            Err(err) => {
                warn!(component = "storage", key, error = ?err, "Failed to read from localStorage");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = LocalStorage::raw().set_item(key, value) {
            warn!(component = "storage", key, error = ?err, "Failed to write to localStorage");
        }
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_round_trips_raw_strings() {
        let store = BrowserStore;
        store.set("test_raw_key", "plain-token");
        assert_eq!(store.get("test_raw_key").as_deref(), Some("plain-token"));

        store.remove("test_raw_key");
        assert_eq!(store.get("test_raw_key"), None);
    }

    #[wasm_bindgen_test]
    fn test_missing_key_is_none() {
        assert_eq!(BrowserStore.get("never_written_key"), None);
    }
}
