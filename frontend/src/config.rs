/// Configuration for the frontend application

/// API base URL, read at compile time.
/// - Local development: "http://localhost:8000/api"
/// - Deployments set `APPOINTMENT_DESK_API_BASE` in the build environment
#[cfg(not(feature = "mock"))]
pub const API_BASE: &str = match option_env!("APPOINTMENT_DESK_API_BASE") {
    Some(url) => url,
    None => "http://localhost:8000/api",
};

/// Session storage keys written by the login flow.
pub const SESSION_LOGGED_IN_KEY: &str = "ad:session:logged_in";
pub const SESSION_TOKEN_KEY: &str = "ad:session:token";

/// Session storage key holding the admin screen's view state.
pub const ADMIN_VIEW_STATE_KEY: &str = "ad:admin:view_state";
