// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{TimeZone, Utc};
use image::{Rgba, RgbaImage};
use strava_wrapped::models::{Activity, ActivityMap, Athlete};
use strava_wrapped::services::AssetStore;

/// Short route near Market Street, San Francisco.
#[allow(dead_code)]
pub const SF_POLYLINE: &str = "gn~eFhmdjVs@gAqAeBuAgB";

/// Three-point route from the polyline format reference.
#[allow(dead_code)]
pub const SIERRA_POLYLINE: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

#[allow(dead_code)]
pub const AVATAR_COLOR: Rgba<u8> = Rgba([10, 20, 200, 255]);

#[allow(dead_code)]
pub const ICON_COLOR: Rgba<u8> = Rgba([0, 200, 0, 255]);

/// Build an activity starting at 08:00 UTC on the given day.
#[allow(dead_code, clippy::too_many_arguments)]
pub fn make_activity(
    id: u64,
    sport: &str,
    (y, m, d): (i32, u32, u32),
    distance: f64,
    elevation: f64,
    moving_time: u64,
    kudos: u32,
    polyline: &str,
) -> Activity {
    Activity {
        id,
        name: format!("{} #{}", sport, id),
        activity_type: sport.to_string(),
        start_date: Utc.with_ymd_and_hms(y, m, d, 8, 0, 0).unwrap(),
        distance,
        moving_time,
        total_elevation_gain: elevation,
        kudos_count: kudos,
        map: ActivityMap {
            summary_polyline: Some(polyline.to_string()),
        },
    }
}

/// Five runs across two complete weeks (2025-01-06 .. 2025-01-19).
#[allow(dead_code)]
pub fn five_runs() -> Vec<Activity> {
    vec![
        make_activity(1, "Run", (2025, 1, 6), 5000.0, 10.0, 1500, 3, SF_POLYLINE),
        make_activity(2, "Run", (2025, 1, 8), 8000.0, 20.0, 2400, 1, SIERRA_POLYLINE),
        make_activity(3, "Run", (2025, 1, 12), 3000.0, 30.0, 900, 0, SF_POLYLINE),
        make_activity(4, "Run", (2025, 1, 15), 10000.0, 40.0, 3000, 5, SIERRA_POLYLINE),
        make_activity(5, "Run", (2025, 1, 19), 6000.0, 50.0, 1800, 2, SF_POLYLINE),
    ]
}

#[allow(dead_code)]
pub fn test_athlete() -> Athlete {
    Athlete {
        firstname: "Ada".to_string(),
        avatar_url: "https://example.com/avatar.jpg".to_string(),
    }
}

#[allow(dead_code)]
pub fn test_avatar() -> RgbaImage {
    RgbaImage::from_pixel(64, 64, AVATAR_COLOR)
}

/// In-memory icons for Run and Ride only.
#[allow(dead_code)]
pub fn test_assets() -> AssetStore {
    let mut assets = AssetStore::in_memory();
    assets.insert("Run.png", RgbaImage::from_pixel(10, 10, ICON_COLOR));
    assets.insert("Ride.png", RgbaImage::from_pixel(10, 10, ICON_COLOR));
    assets
}

/// Channel-wise comparison with a small tolerance for resampling.
#[allow(dead_code)]
pub fn assert_color_near(actual: Rgba<u8>, expected: Rgba<u8>) {
    for c in 0..4 {
        let diff = (i16::from(actual.0[c]) - i16::from(expected.0[c])).abs();
        assert!(diff <= 2, "color {:?} not near {:?}", actual, expected);
    }
}
