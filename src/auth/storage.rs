use crate::supabase::models::Session;

#[cfg(feature = "web")]
const SESSION_KEY: &str = "markone.session";

#[cfg(feature = "web")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load() -> Option<Session> {
    #[cfg(feature = "web")]
    {
        let raw = local_storage()?.get_item(SESSION_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("Discarding unreadable stored session: {}", e);
                clear();
                None
            }
        }
    }
    #[cfg(not(feature = "web"))]
    {
        None
    }
}

pub fn save(session: &Session) {
    #[cfg(feature = "web")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        match serde_json::to_string(session) {
            Ok(raw) => {
                if storage.set_item(SESSION_KEY, &raw).is_err() {
                    tracing::warn!("Failed to persist session");
                }
            }
            Err(e) => tracing::warn!("Failed to serialize session: {}", e),
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = session;
    }
}

pub fn clear() {
    #[cfg(feature = "web")]
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
