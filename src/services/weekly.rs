// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekly distance rollup over complete Monday–Sunday weeks.
//!
//! Partial weeks at either end of the dataset are dropped entirely so a
//! run on the first Wednesday of the year does not drag the average down:
//! 1. Find the first Monday on/after the earliest activity date
//! 2. Find the last Sunday on/before the latest activity date
//! 3. Keep activities inside `[first_monday, last_sunday]`
//! 4. Sum miles per week and report mean and max

use crate::format::meters_to_miles;
use crate::models::{Activity, WeeklyDistance};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::BTreeMap;

/// Compute average and peak weekly miles for the given activities.
///
/// Callers pass activities of a single category. Returns the zero result
/// when there are no activities or no complete week is covered.
pub fn weekly_distance(activities: &[Activity]) -> WeeklyDistance {
    let Some((first_day, last_day)) = date_span(activities) else {
        return WeeklyDistance::default();
    };

    let first_monday = first_complete_monday(first_day);
    let last_sunday = last_complete_sunday(last_day);
    if first_monday > last_sunday {
        tracing::debug!(%first_day, %last_day, "No complete week in dataset");
        return WeeklyDistance::default();
    }

    let mut miles_by_week: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for activity in activities {
        let day = activity.start_date.date_naive();
        if day < first_monday || day > last_sunday {
            continue;
        }
        *miles_by_week.entry(week_start(day)).or_insert(0.0) += meters_to_miles(activity.distance);
    }

    if miles_by_week.is_empty() {
        return WeeklyDistance::default();
    }

    let weeks = miles_by_week.len();
    let total: f64 = miles_by_week.values().sum();
    let peak = miles_by_week.values().copied().fold(f64::MIN, f64::max);

    WeeklyDistance {
        average_miles: total / weeks as f64,
        peak_miles: peak,
        weeks,
    }
}

/// Earliest and latest activity dates.
fn date_span(activities: &[Activity]) -> Option<(NaiveDate, NaiveDate)> {
    let first = activities.iter().map(|a| a.start_date).min()?;
    let last = activities.iter().map(|a| a.start_date).max()?;
    Some((first.date_naive(), last.date_naive()))
}

/// Monday that begins the week containing `day`.
fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.weekday().num_days_from_monday()))
}

/// Monday on/before `day`, pushed a week later unless `day` is itself a Monday.
fn first_complete_monday(day: NaiveDate) -> NaiveDate {
    let monday = week_start(day);
    if day.weekday() == Weekday::Mon {
        monday
    } else {
        monday + Duration::days(7)
    }
}

/// Sunday on/after `day`, pulled a week earlier unless `day` is itself a Sunday.
fn last_complete_sunday(day: NaiveDate) -> NaiveDate {
    let sunday = week_start(day) + Duration::days(6);
    if day.weekday() == Weekday::Sun {
        sunday
    } else {
        sunday - Duration::days(7)
    }
}
