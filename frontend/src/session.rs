use appointment_desk_shared::{AdminViewState, Session};
use web_sys::{window, Storage};

use crate::config::{ADMIN_VIEW_STATE_KEY, SESSION_LOGGED_IN_KEY, SESSION_TOKEN_KEY};

fn session_storage() -> Option<Storage> {
    window().and_then(|win| win.session_storage().ok().flatten())
}

fn read_item(key: &str) -> Option<String> {
    session_storage().and_then(|storage| storage.get_item(key).ok().flatten())
}

/// Calendar year according to the browser clock.
pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

/// Session left in storage by the login flow.
pub fn load_session() -> Session {
    #[cfg(feature = "mock")]
    {
        return Session::logged_in("mock-admin-token");
    }

    #[cfg(not(feature = "mock"))]
    {
        Session {
            logged_in: read_item(SESSION_LOGGED_IN_KEY).as_deref() == Some("true"),
            token: read_item(SESSION_TOKEN_KEY),
        }
    }
}

/// Forget the stored session and the admin view state that belongs to it.
pub fn clear_session() {
    if let Some(storage) = session_storage() {
        let _ = storage.remove_item(SESSION_LOGGED_IN_KEY);
        let _ = storage.remove_item(SESSION_TOKEN_KEY);
        let _ = storage.remove_item(ADMIN_VIEW_STATE_KEY);
    }
}

/// Admin view state of this tab, defaulted on first visit.
pub fn load_admin_view_state() -> AdminViewState {
    AdminViewState::restore_or_new(read_item(ADMIN_VIEW_STATE_KEY).as_deref(), current_year())
}

pub fn save_admin_view_state(state: &AdminViewState) {
    let Some(storage) = session_storage() else {
        return;
    };
    match serde_json::to_string(state) {
        Ok(encoded) => {
            let _ = storage.set_item(ADMIN_VIEW_STATE_KEY, &encoded);
        },
        Err(err) => {
            web_sys::console::error_1(&format!("Failed to store admin view state: {}", err).into());
        },
    }
}
