//! Session State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The session
//! is mirrored to localStorage under the same keys the previous build
//! of this frontend used, so existing logins survive the upgrade.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;
use reactive_stores::Store;

use crate::api::auth::AuthResponse;
use crate::api::ApiError;
use crate::models::UserData;
use crate::router::{Route, RouterContext};

pub const USER_DATA_KEY: &str = "userData";
pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Pause before kicking an expired session to the login page, long
/// enough for the banner to be seen.
pub const AUTH_REDIRECT_DELAY_MS: u32 = 1500;

/// Current login, if any, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct SessionState {
    pub user: Option<UserData>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

/// Type alias for the store
pub type SessionStore = Store<SessionState>;

/// Get the session store from context
pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}

pub fn is_logged_in(store: &SessionStore) -> bool {
    store.user().with(|u| u.is_some())
}

pub fn is_staff(store: &SessionStore) -> bool {
    store.user().with(|u| u.as_ref().map(|x| x.is_staff).unwrap_or(false))
}

pub fn is_dealer(store: &SessionStore) -> bool {
    store.user().with(|u| u.as_ref().map(|x| x.is_dealer).unwrap_or(false))
}

// ========================
// Persistence
// ========================

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Access token as stored, read directly so the HTTP layer needs no
/// reactive context.
pub fn stored_access_token() -> Option<String> {
    local_storage().and_then(|s| s.get_item(ACCESS_TOKEN_KEY).ok().flatten())
}

pub(crate) fn parse_stored_user(raw: &str) -> Option<UserData> {
    serde_json::from_str(raw).ok()
}

/// Rebuild the session from localStorage at startup. A corrupt
/// `userData` entry counts as logged out.
pub fn init_session(store: SessionStore) {
    let Some(storage) = local_storage() else {
        return;
    };
    let user = storage
        .get_item(USER_DATA_KEY)
        .ok()
        .flatten()
        .and_then(|raw| parse_stored_user(&raw));
    if user.is_none() {
        return;
    }
    let access = storage.get_item(ACCESS_TOKEN_KEY).ok().flatten();
    let refresh = storage.get_item(REFRESH_TOKEN_KEY).ok().flatten();
    web_sys::console::log_1(&"[SESSION] restored from storage".into());
    store.user().set(user);
    store.access_token().set(access);
    store.refresh_token().set(refresh);
}

/// Persist a fresh login and publish it to the store.
pub fn establish(store: SessionStore, auth: AuthResponse) {
    if let Some(storage) = local_storage() {
        if let Ok(raw) = serde_json::to_string(&auth.user) {
            let _ = storage.set_item(USER_DATA_KEY, &raw);
        }
        let _ = storage.set_item(ACCESS_TOKEN_KEY, &auth.access_token);
        let _ = storage.set_item(REFRESH_TOKEN_KEY, &auth.refresh_token);
    }
    web_sys::console::log_1(&format!("[SESSION] login: {}", auth.user.email).into());
    store.user().set(Some(auth.user));
    store.access_token().set(Some(auth.access_token));
    store.refresh_token().set(Some(auth.refresh_token));
}

/// Clear the session everywhere: storage first, then the store.
pub fn teardown(store: SessionStore) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(USER_DATA_KEY);
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
    }
    web_sys::console::log_1(&"[SESSION] cleared".into());
    store.user().set(None);
    store.access_token().set(None);
    store.refresh_token().set(None);
}

// ========================
// Error Handling
// ========================

/// Turn an API error into banner text. A 401 additionally tears the
/// session down and schedules a redirect to the login page, delayed so
/// the message is visible first.
pub fn handle_api_error(err: &ApiError, store: SessionStore, router: RouterContext) -> String {
    if err.is_unauthorized() {
        teardown(store);
        spawn_local(async move {
            TimeoutFuture::new(AUTH_REDIRECT_DELAY_MS).await;
            router.navigate(Route::Login);
        });
    }
    err.user_message()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_keys_match_previous_build() {
        assert_eq!(USER_DATA_KEY, "userData");
        assert_eq!(ACCESS_TOKEN_KEY, "access_token");
        assert_eq!(REFRESH_TOKEN_KEY, "refresh_token");
    }

    #[test]
    fn stored_user_round_trips() {
        let user = UserData {
            id: 3,
            email: "admin@omdeh.ir".to_string(),
            name: Some("ادمین".to_string()),
            is_staff: true,
            is_dealer: false,
            company_name: None,
            phone: None,
        };
        let raw = serde_json::to_string(&user).unwrap();
        assert_eq!(parse_stored_user(&raw), Some(user));
    }

    #[test]
    fn corrupt_stored_user_is_rejected() {
        assert_eq!(parse_stored_user("not json"), None);
        assert_eq!(parse_stored_user("{\"id\": \"oops\"}"), None);
        assert_eq!(parse_stored_user(""), None);
    }
}
