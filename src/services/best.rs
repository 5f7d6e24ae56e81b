// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Best-activity selection for story highlights.

use crate::error::{AppError, Result};
use crate::models::Activity;
use std::fmt;

/// Numeric activity field a highlight can be ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Distance,
    KudosCount,
    MovingTime,
    ElevationGain,
}

impl Metric {
    /// Value of this field for an activity.
    pub fn value(self, activity: &Activity) -> f64 {
        match self {
            Metric::Distance => activity.distance,
            Metric::KudosCount => f64::from(activity.kudos_count),
            Metric::MovingTime => activity.moving_time as f64,
            Metric::ElevationGain => activity.total_elevation_gain,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Metric::Distance => "distance",
            Metric::KudosCount => "kudos_count",
            Metric::MovingTime => "moving_time",
            Metric::ElevationGain => "total_elevation_gain",
        })
    }
}

/// Find the activity of `activity_type` with the largest `metric`.
///
/// The running maximum starts at zero and only a strictly greater value
/// replaces it, so an activity whose value is zero (or negative) is never
/// returned, even when it is the only candidate. Ties keep the earliest
/// activity in list order.
pub fn select_best<'a>(
    activities: &'a [Activity],
    activity_type: &str,
    metric: Metric,
) -> Option<&'a Activity> {
    let mut best_value = 0.0;
    let mut best = None;

    for activity in activities.iter().filter(|a| a.is_type(activity_type)) {
        let value = metric.value(activity);
        if value > best_value {
            best_value = value;
            best = Some(activity);
        }
    }

    best
}

/// Like [`select_best`], but a missing winner is an error.
pub fn require_best<'a>(
    activities: &'a [Activity],
    activity_type: &str,
    metric: Metric,
) -> Result<&'a Activity> {
    select_best(activities, activity_type, metric).ok_or_else(|| {
        AppError::NoQualifyingActivity {
            category: activity_type.to_string(),
            metric,
        }
    })
}
