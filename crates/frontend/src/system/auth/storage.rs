use web_sys::window;

use super::session::Session;

const SESSION_KEY: &str = "smartwaste_session";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the session to localStorage
pub fn save_session(session: &Session) {
    let Some(storage) = get_local_storage() else {
        log::warn!("localStorage unavailable, session not persisted");
        return;
    };
    match serde_json::to_string(session) {
        Ok(json) => {
            if storage.set_item(SESSION_KEY, &json).is_err() {
                log::warn!("Failed to persist session");
            }
        }
        Err(e) => log::error!("Failed to serialize session: {}", e),
    }
}

/// Restore the session saved by [`save_session`]
pub fn load_session() -> Option<Session> {
    let json = get_local_storage()?.get_item(SESSION_KEY).ok()??;
    match serde_json::from_str(&json) {
        Ok(session) => Some(session),
        Err(e) => {
            log::warn!("Discarding unreadable stored session: {}", e);
            clear_session();
            None
        }
    }
}

/// Remove the stored session
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
