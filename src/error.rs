// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types shared by the aggregation and rendering layers.

use crate::config::ConfigError;
use crate::services::best::Metric;

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No {category} activity with a positive {metric}")]
    NoQualifyingActivity { category: String, metric: Metric },

    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    #[error("Failed to decode polyline: {0}")]
    Polyline(String),

    #[error("Font error: {0}")]
    Font(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Strava API error: {0}")]
    StravaApi(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Marker for 429 responses from Strava.
    pub const STRAVA_RATE_LIMIT: &'static str = "Rate limit exceeded";

    /// Marker for 401 responses from Strava.
    pub const STRAVA_TOKEN_ERROR: &'static str = "Invalid or expired access token";

    /// Whether this error means no activity could be highlighted.
    pub fn is_no_qualifying_activity(&self) -> bool {
        matches!(self, AppError::NoQualifyingActivity { .. })
    }
}

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, AppError>;
