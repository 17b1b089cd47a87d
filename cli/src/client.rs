//! reqwest implementation of the admin API.

use appointment_desk_shared::{
    api::{bearer, paths},
    AdminApi, ApiError, Appointment, User,
};
use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, Client, StatusCode};
use serde::de::DeserializeOwned;

/// Admin API client talking to the backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpAdminApi {
    client: Client,
    base: String,
}

impl HttpAdminApi {
    /// Client for the API rooted at `base`.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base: base.into(),
        }
    }

    async fn fetch_list<T>(&self, path: &str, token: &str) -> Result<Vec<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = paths::join(&self.base, path);
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl AdminApi for HttpAdminApi {
    async fn get_all_users(&self, token: &str) -> Result<Vec<User>, ApiError> {
        self.fetch_list(paths::USERS, token).await
    }

    async fn get_all_appointments(&self, token: &str) -> Result<Vec<Appointment>, ApiError> {
        self.fetch_list(paths::APPOINTMENTS, token).await
    }

    async fn get_appointments_by_phone(
        &self,
        token: &str,
        phone: &str,
    ) -> Result<Vec<Appointment>, ApiError> {
        self.fetch_list(&paths::appointments_by_phone(phone), token).await
    }

    async fn get_appointments_by_month_year(
        &self,
        token: &str,
        month: u32,
        year: i32,
    ) -> Result<Vec<Appointment>, ApiError> {
        self.fetch_list(&paths::appointments_by_month_year(month, year), token)
            .await
    }
}
