use web_sys::Storage;

use crate::models::{AuthResponse, User};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

fn storage() -> Option<Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Persists the token and user returned by login or register.
pub fn save(auth: &AuthResponse) {
    let Some(storage) = storage() else {
        log::warn!("Local storage unavailable, session will not persist");
        return;
    };

    for key in write_session(auth, |key, value| storage.set_item(key, value)) {
        log::error!("Failed to store session {}", key);
    }
    log::info!("Session stored for {}", auth.user.email);
}

pub fn token() -> Option<String> {
    storage()
        .and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
        .filter(|t| !t.is_empty())
}

pub fn user() -> Option<User> {
    storage()
        .and_then(|s| s.get_item(USER_KEY).ok().flatten())
        .and_then(|raw| decode_user(&raw))
}

pub fn is_authenticated() -> bool {
    token().is_some()
}

pub fn clear() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
    log::info!("Session cleared");
}

/// Writes the token and the serialized user through `set_item`, returning the
/// keys that could not be stored.
fn write_session<E>(
    auth: &AuthResponse,
    mut set_item: impl FnMut(&str, &str) -> Result<(), E>,
) -> Vec<&'static str> {
    let mut failed = Vec::new();
    if set_item(TOKEN_KEY, &auth.token).is_err() {
        failed.push(TOKEN_KEY);
    }
    match encode_user(&auth.user) {
        Ok(raw) => {
            if set_item(USER_KEY, &raw).is_err() {
                failed.push(USER_KEY);
            }
        }
        Err(e) => {
            log::error!("Failed to serialize user: {}", e);
            failed.push(USER_KEY);
        }
    }
    failed
}

fn encode_user(user: &User) -> serde_json::Result<String> {
    serde_json::to_string(user)
}

fn decode_user(raw: &str) -> Option<User> {
    match serde_json::from_str(raw) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("Ignoring unreadable stored user: {}", e);
            None
        }
    }
}
