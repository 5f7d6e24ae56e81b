// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! End-to-end tests for the category summary story.

mod common;

use common::*;
use strava_wrapped::config::StoryTheme;
use strava_wrapped::error::AppError;
use strava_wrapped::models::CategorySummary;
use strava_wrapped::render::{Fonts, SummaryRenderer};
use strava_wrapped::services::{weekly_distance, AssetStore};

#[test]
fn test_five_runs_summary_matches_manual_totals() {
    let runs = five_runs();

    let summary = CategorySummary::from_activities("Run", &runs);

    assert_eq!(summary.count, 5);
    assert!((summary.total_distance_miles - 32000.0 * 0.000621371).abs() < 1e-9);
    assert!((summary.total_elevation_gain_ft - 150.0 * 3.28084).abs() < 1e-9);
    assert_eq!(summary.moving_time_s, 9600);
}

#[test]
fn test_five_runs_summary_renders_full_canvas() {
    let runs = five_runs();
    let summary = CategorySummary::from_activities("Run", &runs);
    let theme = StoryTheme::for_year(2025);
    let fonts = Fonts::new_mock();
    let assets = test_assets();

    let img = SummaryRenderer::new(&theme, &fonts, &assets)
        .render(&summary, &test_athlete(), &test_avatar(), &runs)
        .expect("summary should render");

    assert_eq!(img.dimensions(), (1080, 1920));
    // Gradient starts at the top colour.
    assert_eq!(*img.get_pixel(5, 5), theme.bg_top);
    // Avatar centre (80 + 110, 100 + 110).
    assert_color_near(*img.get_pixel(190, 210), AVATAR_COLOR);
    // Badge icon centred on the badge.
    assert_color_near(*img.get_pixel(830, 640), ICON_COLOR);
    // Nothing of the badge below its radius.
    assert_ne!(*img.get_pixel(830, 830), theme.accent);
    // Both highlight cards are pasted at their slots.
    assert_eq!(*img.get_pixel(125, 1225), theme.map_bg);
    assert_eq!(*img.get_pixel(585, 1225), theme.map_bg);
}

#[test]
fn test_summary_scales_to_smaller_canvas() {
    let runs = five_runs();
    let summary = CategorySummary::from_activities("Run", &runs);
    let theme = StoryTheme::for_year(2025).with_size(540, 960);
    let fonts = Fonts::new_mock();
    let assets = test_assets();

    let img = SummaryRenderer::new(&theme, &fonts, &assets)
        .render(&summary, &test_athlete(), &test_avatar(), &runs)
        .unwrap();

    assert_eq!(img.dimensions(), (540, 960));
    assert_color_near(*img.get_pixel(95, 105), AVATAR_COLOR);
    assert_color_near(*img.get_pixel(415, 320), ICON_COLOR);
    assert_eq!(*img.get_pixel(63, 613), theme.map_bg);
    assert_eq!(*img.get_pixel(293, 613), theme.map_bg);
}

#[test]
fn test_other_categories_do_not_leak_into_summary() {
    let mut activities = five_runs();
    activities.push(make_activity(
        99,
        "Ride",
        (2025, 1, 7),
        80000.0,
        900.0,
        10800,
        50,
        SIERRA_POLYLINE,
    ));

    let summary = CategorySummary::from_activities("Run", &activities);
    assert_eq!(summary.count, 5);
    assert_eq!(summary.moving_time_s, 9600);

    let runs_only = weekly_distance(&five_runs());
    let runs: Vec<_> = activities.iter().filter(|a| a.is_type("Run")).cloned().collect();
    assert_eq!(weekly_distance(&runs), runs_only);

    // The renderer filters by category itself, so the mixed list renders too.
    let theme = StoryTheme::for_year(2025);
    let fonts = Fonts::new_mock();
    let assets = test_assets();
    SummaryRenderer::new(&theme, &fonts, &assets)
        .render(&summary, &test_athlete(), &test_avatar(), &activities)
        .expect("mixed input should render");
}

#[test]
fn test_no_liked_activity_is_reported() {
    let runs: Vec<_> = five_runs()
        .into_iter()
        .map(|mut a| {
            a.kudos_count = 0;
            a
        })
        .collect();
    let summary = CategorySummary::from_activities("Run", &runs);
    let theme = StoryTheme::for_year(2025);
    let fonts = Fonts::new_mock();
    let assets = test_assets();

    let err = SummaryRenderer::new(&theme, &fonts, &assets)
        .render(&summary, &test_athlete(), &test_avatar(), &runs)
        .unwrap_err();

    assert!(err.is_no_qualifying_activity(), "unexpected error: {}", err);
}

#[test]
fn test_missing_badge_icon_fails_artifact() {
    let runs = five_runs();
    let summary = CategorySummary::from_activities("Run", &runs);
    let theme = StoryTheme::for_year(2025);
    let fonts = Fonts::new_mock();
    let assets = AssetStore::in_memory();

    let err = SummaryRenderer::new(&theme, &fonts, &assets)
        .render(&summary, &test_athlete(), &test_avatar(), &runs)
        .unwrap_err();

    assert!(matches!(err, AppError::AssetNotFound(name) if name == "Run.png"));
}

#[test]
fn test_empty_category_is_invalid_input() {
    let runs = five_runs();
    let summary = CategorySummary::from_activities("Swim", &runs);
    let theme = StoryTheme::for_year(2025);
    let fonts = Fonts::new_mock();
    let assets = test_assets();

    let err = SummaryRenderer::new(&theme, &fonts, &assets)
        .render(&summary, &test_athlete(), &test_avatar(), &runs)
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn test_write_creates_png_of_canvas_size() {
    let runs = five_runs();
    let summary = CategorySummary::from_activities("Run", &runs);
    let theme = StoryTheme::for_year(2025);
    let fonts = Fonts::new_mock();
    let assets = test_assets();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Run_wrapped.png");

    SummaryRenderer::new(&theme, &fonts, &assets)
        .write(&summary, &test_athlete(), &test_avatar(), &runs, &path)
        .unwrap();

    let written = image::open(&path).unwrap();
    assert_eq!((written.width(), written.height()), (1080, 1920));
}
