// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava activity and athlete records as consumed by the story engine.

use crate::error::{AppError, Result};
use chrono::{DateTime, Utc};
use geo::LineString;
use serde::{Deserialize, Serialize};

/// A recorded activity, as returned by `GET /athlete/activities`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Strava activity ID
    #[serde(default)]
    pub id: u64,
    /// Activity name/title
    pub name: String,
    /// Category label (Ride, Run, Hike, etc.)
    #[serde(rename = "type")]
    pub activity_type: String,
    /// Start date/time (UTC)
    pub start_date: DateTime<Utc>,
    /// Distance in meters
    pub distance: f64,
    /// Moving time in seconds
    pub moving_time: u64,
    /// Elevation gain in meters
    #[serde(default)]
    pub total_elevation_gain: f64,
    #[serde(default)]
    pub kudos_count: u32,
    #[serde(default)]
    pub map: ActivityMap,
}

/// Activity map data with the summary polyline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityMap {
    pub summary_polyline: Option<String>,
}

impl Activity {
    /// Whether this activity belongs to the given category label.
    pub fn is_type(&self, activity_type: &str) -> bool {
        self.activity_type == activity_type
    }

    /// Decode the summary polyline (Strava format, precision 5).
    ///
    /// Coordinates are `x = longitude`, `y = latitude`.
    pub fn route(&self) -> Result<LineString<f64>> {
        let encoded = self
            .map
            .summary_polyline
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| {
                AppError::InvalidInput(format!("Activity {} has no polyline", self.id))
            })?;

        let line = polyline::decode_polyline(encoded, 5)
            .map_err(|e| AppError::Polyline(e.to_string()))?;
        if line.0.is_empty() {
            return Err(AppError::Polyline(format!(
                "Activity {} decoded to an empty route",
                self.id
            )));
        }
        Ok(line)
    }
}

/// Authenticated athlete profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Athlete {
    pub firstname: String,
    /// Profile picture URL
    #[serde(rename = "profile_medium")]
    pub avatar_url: String,
}
