// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tests for error messages and conversions.

use strava_wrapped::config::ConfigError;
use strava_wrapped::error::AppError;
use strava_wrapped::services::Metric;

#[test]
fn test_no_qualifying_activity_message() {
    let err = AppError::NoQualifyingActivity {
        category: "Run".to_string(),
        metric: Metric::KudosCount,
    };
    assert_eq!(err.to_string(), "No Run activity with a positive kudos_count");
    assert!(err.is_no_qualifying_activity());
}

#[test]
fn test_other_errors_are_not_no_qualifying() {
    let err = AppError::AssetNotFound("Run.png".to_string());
    assert_eq!(err.to_string(), "Asset not found: Run.png");
    assert!(!err.is_no_qualifying_activity());
}

#[test]
fn test_io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: AppError = io.into();
    assert!(matches!(err, AppError::Io(_)));
    assert!(err.to_string().contains("gone"));
}

#[test]
fn test_config_error_converts() {
    let err: AppError = ConfigError::Invalid {
        name: "WRAPPED_YEAR",
        value: "soon".to_string(),
    }
    .into();
    assert!(matches!(err, AppError::Config(_)));
    assert_eq!(
        err.to_string(),
        "Configuration error: Invalid value for WRAPPED_YEAR: \"soon\""
    );
}

#[test]
fn test_image_error_converts() {
    let decode = image::load_from_memory(b"not an image").unwrap_err();
    let err: AppError = decode.into();
    assert!(matches!(err, AppError::Image(_)));
}

#[test]
fn test_strava_markers() {
    let err = AppError::StravaApi(AppError::STRAVA_RATE_LIMIT.to_string());
    assert_eq!(err.to_string(), "Strava API error: Rate limit exceeded");
}
