// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava Wrapped batch run.
//!
//! Loads one athlete's activities for the configured year (from Strava or
//! from local JSON), then writes the category stories, route highlights
//! and overview chart.

use std::fs;
use std::process::ExitCode;

use strava_wrapped::{
    config::{Config, StoryTheme},
    error::{AppError, Result},
    models::{Activity, Athlete},
    render::{layout::AVATAR_SIZE, Fonts},
    services::{decode_avatar, AssetStore, StravaClient, WrappedGenerator},
    time_utils::start_of_year,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize structured JSON logging
    init_logging();

    match run().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            tracing::error!(error = %e, "Wrapped run failed");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when some artifacts failed but the run completed.
async fn run() -> Result<bool> {
    let config = Config::from_env()?;
    tracing::info!(year = config.year, categories = ?config.categories, "Starting Strava Wrapped");

    let (athlete, activities, avatar_bytes) = match &config.strava_access_token {
        Some(token) => fetch_from_strava(token, config.year).await?,
        None => load_from_files(&config).await?,
    };
    tracing::info!(
        athlete = %athlete.firstname,
        count = activities.len(),
        "Loaded activities"
    );

    let theme = StoryTheme::for_year(config.year);
    let fonts = Fonts::load(&config.fonts)?;
    let assets = AssetStore::from_dir(&config.assets_dir);
    let avatar = decode_avatar(&avatar_bytes, AVATAR_SIZE)?;

    fs::create_dir_all(&config.output_dir)?;
    let report = WrappedGenerator::new(&theme, &fonts, &assets, &config.output_dir).generate(
        &athlete,
        &avatar,
        &activities,
        &config.categories,
        config.top_k,
    )?;

    for path in &report.written {
        tracing::info!(path = %path.display(), "Wrote artifact");
    }
    for failure in &report.failures {
        tracing::warn!(artifact = %failure.artifact, error = %failure.error, "Skipped artifact");
    }
    Ok(report.is_success())
}

async fn fetch_from_strava(token: &str, year: i32) -> Result<(Athlete, Vec<Activity>, Vec<u8>)> {
    let client = StravaClient::new(token.to_string());

    tracing::info!("Fetching athlete profile");
    let athlete = client.get_athlete().await?;

    let after = start_of_year(year)?;
    let before = start_of_year(year + 1)?;
    tracing::info!(after = %after, "Fetching activities");
    let activities: Vec<Activity> = client
        .list_all_activities(after.timestamp())
        .await?
        .into_iter()
        .filter(|a| a.start_date < before)
        .collect();

    let avatar = client.fetch_image(&athlete.avatar_url).await?;
    Ok((athlete, activities, avatar))
}

async fn load_from_files(config: &Config) -> Result<(Athlete, Vec<Activity>, Vec<u8>)> {
    tracing::info!(
        activities = %config.activities_file.display(),
        athlete = %config.athlete_file.display(),
        "No STRAVA_ACCESS_TOKEN set, reading local JSON"
    );

    let athlete: Athlete = read_json(&config.athlete_file)?;
    let activities: Vec<Activity> = read_json(&config.activities_file)?;

    // Remote avatars still need a fetch; local paths are read directly.
    let avatar = if athlete.avatar_url.starts_with("http") {
        StravaClient::new(String::new())
            .fetch_image(&athlete.avatar_url)
            .await?
    } else {
        fs::read(&athlete.avatar_url)?
    };
    Ok((athlete, activities, avatar))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &std::path::Path) -> Result<T> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|e| {
        AppError::InvalidInput(format!("{}: {}", path.display(), e))
    })
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("strava_wrapped=debug,info")
        }))
        .with(format)
        .init();
}
