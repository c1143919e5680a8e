//! LocalStorage access (WASM only)

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
}

/// Read a value; `None` when storage is unavailable or the key is unset
pub fn get_item(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

/// Write a value. Returns false if storage is unavailable or full.
pub fn set_item(key: &str, value: &str) -> bool {
    match local_storage() {
        Some(storage) => match storage.set_item(key, value) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Failed to write `{}` to LocalStorage: {:?}", key, e);
                false
            }
        },
        None => false,
    }
}
