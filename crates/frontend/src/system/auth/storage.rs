use contracts::system::auth::SessionStorage;
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// `window.localStorage`; reads see nothing and writes are dropped when the
/// browser refuses access.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl SessionStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = get_local_storage() {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("localStorage.setItem({key}) failed: {:?}", e);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
