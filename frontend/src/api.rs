use appointment_desk_shared::{AdminApi, ApiError, Appointment, User};
use async_trait::async_trait;
#[cfg(not(feature = "mock"))]
use appointment_desk_shared::api::{bearer, paths};
#[cfg(not(feature = "mock"))]
use gloo_net::http::Request;
#[cfg(not(feature = "mock"))]
use js_sys::Date;
#[cfg(not(feature = "mock"))]
use serde::de::DeserializeOwned;

#[cfg(not(feature = "mock"))]
use crate::config::API_BASE;
#[cfg(feature = "mock")]
use crate::models;

/// Browser client for the admin endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserAdminApi;

/// GET one admin list. A 404 means "nothing matched" and yields an empty list.
#[cfg(not(feature = "mock"))]
async fn fetch_list<T>(path: &str, token: &str) -> Result<Vec<T>, ApiError>
where
    T: DeserializeOwned,
{
    let url = format!("{}?_ts={}", paths::join(API_BASE, path), Date::now() as u64);

    let response = Request::get(&url)
        .header("Authorization", &bearer(token))
        .header("Cache-Control", "no-cache, no-store, max-age=0")
        .header("Pragma", "no-cache")
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    if response.status() == 404 {
        return Ok(Vec::new());
    }

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json::<Vec<T>>()
        .await
        .map_err(|e| ApiError::Decode(format!("{:?}", e)))
}

#[async_trait(?Send)]
impl AdminApi for BrowserAdminApi {
    async fn get_all_users(&self, token: &str) -> Result<Vec<User>, ApiError> {
        #[cfg(feature = "mock")]
        {
            let _ = token;
            return Ok(models::get_mock_users());
        }

        #[cfg(not(feature = "mock"))]
        {
            fetch_list(paths::USERS, token).await
        }
    }

    async fn get_all_appointments(&self, token: &str) -> Result<Vec<Appointment>, ApiError> {
        #[cfg(feature = "mock")]
        {
            let _ = token;
            return Ok(models::get_mock_appointments());
        }

        #[cfg(not(feature = "mock"))]
        {
            fetch_list(paths::APPOINTMENTS, token).await
        }
    }

    async fn get_appointments_by_phone(
        &self,
        token: &str,
        phone: &str,
    ) -> Result<Vec<Appointment>, ApiError> {
        #[cfg(feature = "mock")]
        {
            let _ = token;
            let phone = phone.trim();
            return Ok(models::get_mock_appointments()
                .into_iter()
                .filter(|item| item.phone_number == phone)
                .collect());
        }

        #[cfg(not(feature = "mock"))]
        {
            fetch_list(&paths::appointments_by_phone(phone), token).await
        }
    }

    async fn get_appointments_by_month_year(
        &self,
        token: &str,
        month: u32,
        year: i32,
    ) -> Result<Vec<Appointment>, ApiError> {
        #[cfg(feature = "mock")]
        {
            let _ = token;
            let prefix = format!("{:04}-{:02}-", year, month);
            return Ok(models::get_mock_appointments()
                .into_iter()
                .filter(|item| item.date.starts_with(&prefix))
                .collect());
        }

        #[cfg(not(feature = "mock"))]
        {
            fetch_list(&paths::appointments_by_month_year(month, year), token).await
        }
    }
}
