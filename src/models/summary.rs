// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Per-category aggregates computed once per run.

use crate::format::{meters_to_feet, meters_to_miles};
use crate::models::Activity;
use std::collections::BTreeMap;

/// Totals for one activity category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    /// Category label (Run, Ride, ...)
    pub activity_type: String,
    pub count: usize,
    pub total_distance_miles: f64,
    pub total_elevation_gain_ft: f64,
    pub moving_time_s: u64,
}

impl CategorySummary {
    /// Aggregate the activities of exactly one category.
    pub fn from_activities(activity_type: &str, activities: &[Activity]) -> Self {
        let mut summary = Self::empty(activity_type);
        for activity in activities.iter().filter(|a| a.is_type(activity_type)) {
            summary.add(activity);
        }
        summary
    }

    fn empty(activity_type: &str) -> Self {
        Self {
            activity_type: activity_type.to_string(),
            count: 0,
            total_distance_miles: 0.0,
            total_elevation_gain_ft: 0.0,
            moving_time_s: 0,
        }
    }

    fn add(&mut self, activity: &Activity) {
        self.count += 1;
        self.total_distance_miles += meters_to_miles(activity.distance);
        self.total_elevation_gain_ft += meters_to_feet(activity.total_elevation_gain);
        self.moving_time_s += activity.moving_time;
    }
}

/// Summaries for every category present, most frequent first.
pub fn summarize_by_category(activities: &[Activity]) -> Vec<CategorySummary> {
    let mut by_type: BTreeMap<&str, CategorySummary> = BTreeMap::new();
    for activity in activities {
        by_type
            .entry(activity.activity_type.as_str())
            .or_insert_with(|| CategorySummary::empty(&activity.activity_type))
            .add(activity);
    }

    let mut summaries: Vec<CategorySummary> = by_type.into_values().collect();
    // Stable sort keeps label order for equal counts.
    summaries.sort_by(|a, b| b.count.cmp(&a.count));
    summaries
}

/// Average and peak weekly distance over complete calendar weeks.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeeklyDistance {
    pub average_miles: f64,
    pub peak_miles: f64,
    /// Number of weeks with activity that contributed.
    pub weeks: usize,
}
