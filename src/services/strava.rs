// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client for fetching the inputs of a wrapped run.
//!
//! Handles:
//! - Authenticated athlete profile
//! - Paginated activity listing for a time window
//! - Avatar download
//! - Rate limit / token error detection
//!
//! The access token is supplied by the caller; no OAuth exchange happens here.

use crate::error::AppError;
use crate::models::{Activity, Athlete};
use serde::Deserialize;

/// Page size for `GET /athlete/activities` (Strava maximum).
const ACTIVITIES_PER_PAGE: u32 = 200;

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl StravaClient {
    /// Create a new Strava client for one athlete's access token.
    pub fn new(access_token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: "https://www.strava.com/api/v3".to_string(),
            access_token,
        }
    }

    /// Get authenticated athlete profile.
    pub async fn get_athlete(&self) -> Result<Athlete, AppError> {
        let url = format!("{}/athlete", self.base_url);
        self.get_json(&url, &[]).await
    }

    /// List one page of activities started after `after` (Unix timestamp).
    pub async fn list_activities(
        &self,
        after: i64,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Activity>, AppError> {
        let url = format!("{}/athlete/activities", self.base_url);
        self.get_json(
            &url,
            &[
                ("after", after.to_string()),
                ("page", page.to_string()),
                ("per_page", per_page.to_string()),
            ],
        )
        .await
    }

    /// Fetch every activity started after `after`, following pages until
    /// Strava returns an empty one.
    pub async fn list_all_activities(&self, after: i64) -> Result<Vec<Activity>, AppError> {
        let mut activities = Vec::new();
        let mut page = 1;

        loop {
            let batch = self
                .list_activities(after, page, ACTIVITIES_PER_PAGE)
                .await?;
            if batch.is_empty() {
                break;
            }
            tracing::debug!(page, count = batch.len(), "Fetched activity page");
            activities.extend(batch);
            page += 1;
        }

        tracing::info!(count = activities.len(), pages = page - 1, "Fetched activities");
        Ok(activities)
    }

    /// Download raw image bytes (athlete avatar).
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::StravaApi(format!("Image request failed: {}", e)))?;

        let response = check_response(response).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::StravaApi(format!("Image download failed: {}", e)))?;
        Ok(bytes.to_vec())
    }

    /// Generic GET request with JSON response.
    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.access_token)
            .query(query)
            .send()
            .await
            .map_err(|e| AppError::StravaApi(e.to_string()))?;

        check_response(response)
            .await?
            .json()
            .await
            .map_err(|e| AppError::StravaApi(format!("JSON parse error: {}", e)))
    }
}

/// Check response status and return error if not successful.
async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, AppError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if status.as_u16() == 429 {
        tracing::warn!("Strava rate limit hit (429)");
        return Err(AppError::StravaApi(AppError::STRAVA_RATE_LIMIT.to_string()));
    }

    if status.as_u16() == 401 {
        return Err(AppError::StravaApi(
            AppError::STRAVA_TOKEN_ERROR.to_string(),
        ));
    }

    Err(AppError::StravaApi(format!("HTTP {}: {}", status, body)))
}
