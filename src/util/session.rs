//! Session credential storage in `localStorage`.
//!
//! Holds the bearer token and the per-user session identifier attached to
//! every API request. A 401 response clears both and sends the user to the
//! login boundary. Requires a browser environment.

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "auth_token";
#[cfg(feature = "hydrate")]
const SESSION_KEY: &str = "user_uuid";

/// Read the stored bearer token, if any.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        read_item(TOKEN_KEY)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Read the stored session identifier, if any.
pub fn read_session_id() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        read_item(SESSION_KEY)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a credential pair after login.
pub fn store(token: &str, session_id: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
            let _ = storage.set_item(SESSION_KEY, session_id);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, session_id);
    }
}

/// Drop any stored credentials.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}

/// Navigate to the login boundary. Used by the transport client after an
/// unauthorized response.
pub fn redirect_to_login() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(feature = "hydrate")]
fn read_item(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}
