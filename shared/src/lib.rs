//! Shared building blocks of the appointment desk admin screen.
//!
//! Everything here is target independent so the Yew frontend (wasm32) and the
//! operator CLI (native) drive the same view state machine and render pass.

pub mod api;
pub mod pagination;
pub mod view;
pub mod view_state;

use serde::{Deserialize, Serialize};

pub use api::{AdminApi, ApiError};
pub use view::{render_pass, AdminActionsSnapshot, PageOutcome, SearchResults, LOGIN_WARNING};
pub use view_state::{AdminEvent, AdminViewState, ListPanel, NavTarget, SearchKind, SearchMode};

/// Authenticated operator session, created by the login flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Whether the login flow completed.
    pub logged_in: bool,
    /// Opaque bearer credential issued by the backend.
    pub token: Option<String>,
}

impl Session {
    /// Session for an operator holding `token`.
    pub fn logged_in(token: impl Into<String>) -> Self {
        Self {
            logged_in: true,
            token: Some(token.into()),
        }
    }

    /// Token of a usable session; `None` when logged out or the token is
    /// blank.
    pub fn active_token(&self) -> Option<&str> {
        if !self.logged_in {
            return None;
        }
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}

/// Registered user as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Backend identifier.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Whether the user holds admin rights.
    #[serde(default)]
    pub is_admin: bool,
}

/// Booked appointment as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    /// Backend identifier.
    pub id: i64,
    /// Name the appointment was booked under.
    #[serde(default)]
    pub name: Option<String>,
    /// Phone number the appointment was booked with.
    pub phone_number: String,
    /// Day of the appointment, `YYYY-MM-DD`.
    pub date: String,
    /// Start time, `HH:MM`.
    #[serde(default)]
    pub time: Option<String>,
    /// Booked service.
    #[serde(default)]
    pub service: Option<String>,
    /// Free-form note left by the customer.
    #[serde(default)]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{Appointment, Session};

    #[test]
    fn session_requires_login_flag_and_token() {
        assert_eq!(Session::default().active_token(), None);
        assert_eq!(
            Session {
                logged_in: true,
                token: Some("   ".to_string()),
            }
            .active_token(),
            None
        );
        assert_eq!(
            Session {
                logged_in: false,
                token: Some("abc".to_string()),
            }
            .active_token(),
            None
        );
        assert_eq!(Session::logged_in(" abc ").active_token(), Some("abc"));
    }

    #[test]
    fn appointment_optional_fields_default_to_none() {
        let raw = r#"{"id": 7, "phone_number": "555-0100", "date": "2026-03-14"}"#;
        let appointment: Appointment = serde_json::from_str(raw).expect("decode appointment");
        assert_eq!(appointment.id, 7);
        assert_eq!(appointment.phone_number, "555-0100");
        assert!(appointment.name.is_none());
        assert!(appointment.time.is_none());
    }
}
