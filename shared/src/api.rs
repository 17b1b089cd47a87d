//! Contract of the backend calls the admin screen depends on.

use async_trait::async_trait;
use thiserror::Error;

use crate::{Appointment, User};

/// Failure talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// Backend answered with a non-success status.
    #[error("HTTP error: {0}")]
    Status(u16),
    /// Response body did not match the expected shape.
    #[error("parse error: {0}")]
    Decode(String),
}

/// Read-only admin endpoints of the appointment backend.
///
/// Implementations return an empty list when nothing matches; only transport,
/// status and decoding problems are errors.
#[async_trait(?Send)]
pub trait AdminApi {
    /// Every registered user.
    async fn get_all_users(&self, token: &str) -> Result<Vec<User>, ApiError>;

    /// Every appointment.
    async fn get_all_appointments(&self, token: &str) -> Result<Vec<Appointment>, ApiError>;

    /// Appointments booked with `phone`.
    async fn get_appointments_by_phone(
        &self,
        token: &str,
        phone: &str,
    ) -> Result<Vec<Appointment>, ApiError>;

    /// Appointments falling in `month`/`year`.
    async fn get_appointments_by_month_year(
        &self,
        token: &str,
        month: u32,
        year: i32,
    ) -> Result<Vec<Appointment>, ApiError>;
}

/// Endpoint paths relative to the API base URL.
pub mod paths {
    /// All users.
    pub const USERS: &str = "/admin/users";
    /// All appointments.
    pub const APPOINTMENTS: &str = "/admin/appointments";

    /// Appointments for one phone number.
    pub fn appointments_by_phone(phone: &str) -> String {
        format!("{APPOINTMENTS}/phone/{}", urlencoding::encode(phone))
    }

    /// Appointments for one calendar month.
    pub fn appointments_by_month_year(month: u32, year: i32) -> String {
        format!("{APPOINTMENTS}/month/{month}/year/{year}")
    }

    /// Join `base` and `path` without doubling the slash.
    pub fn join(base: &str, path: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), path)
    }
}

/// Value of the `Authorization` header for `token`.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(test)]
mod tests {
    use super::{bearer, paths, ApiError};

    #[test]
    fn phone_path_is_url_encoded() {
        assert_eq!(
            paths::appointments_by_phone("+1 555/0100"),
            "/admin/appointments/phone/%2B1%20555%2F0100"
        );
    }

    #[test]
    fn month_year_path_and_join() {
        assert_eq!(
            paths::join("http://localhost:8000/api/", &paths::appointments_by_month_year(3, 2026)),
            "http://localhost:8000/api/admin/appointments/month/3/year/2026"
        );
        assert_eq!(paths::join("/api", paths::USERS), "/api/admin/users");
    }

    #[test]
    fn errors_render_readably() {
        assert_eq!(ApiError::Status(502).to_string(), "HTTP error: 502");
        assert_eq!(bearer("abc"), "Bearer abc");
    }
}
