// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Wrapped run orchestration.
//!
//! Handles the batch workflow for one dataset snapshot:
//! 1. Summarize activities per category
//! 2. Write one summary story per requested category
//! 3. Write the longest / most liked route snapshots for that category
//! 4. Write the top-K overview chart
//!
//! A failed artifact is logged and reported; unrelated artifacts still run.

use crate::config::StoryTheme;
use crate::error::{AppError, Result};
use crate::models::{summarize_by_category, Activity, Athlete, CategorySummary};
use crate::render::highlight::{LONGEST_CAPTION, MOST_LIKED_CAPTION};
use crate::render::{render_top_k, Fonts, HighlightRenderer, SummaryRenderer};
use crate::services::assets::AssetStore;
use crate::services::best::{require_best, Metric};
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// Generates every artifact of a wrapped run into one directory.
pub struct WrappedGenerator<'a> {
    theme: &'a StoryTheme,
    fonts: &'a Fonts,
    assets: &'a AssetStore,
    output_dir: PathBuf,
}

/// Outcome of a run.
#[derive(Debug, Default)]
pub struct WrappedReport {
    /// Artifacts written, in order
    pub written: Vec<PathBuf>,
    /// Artifacts that could not be produced
    pub failures: Vec<ArtifactFailure>,
}

/// One artifact that failed to generate.
#[derive(Debug)]
pub struct ArtifactFailure {
    pub artifact: String,
    pub error: AppError,
}

impl WrappedReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, artifact: String, result: Result<Vec<PathBuf>>) {
        match result {
            Ok(paths) => self.written.extend(paths),
            Err(error) => {
                tracing::error!(artifact = %artifact, error = %error, "Artifact failed");
                self.failures.push(ArtifactFailure { artifact, error });
            }
        }
    }
}

impl<'a> WrappedGenerator<'a> {
    pub fn new(
        theme: &'a StoryTheme,
        fonts: &'a Fonts,
        assets: &'a AssetStore,
        output_dir: impl AsRef<Path>,
    ) -> Self {
        Self {
            theme,
            fonts,
            assets,
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Generate stories for `categories` plus the top-K chart (`top_k == 0`
    /// skips the chart).
    pub fn generate(
        &self,
        athlete: &Athlete,
        avatar: &RgbaImage,
        activities: &[Activity],
        categories: &[String],
        top_k: usize,
    ) -> Result<WrappedReport> {
        if activities.is_empty() {
            return Err(AppError::InvalidInput("No activities to wrap".to_string()));
        }

        let summaries = summarize_by_category(activities);
        for summary in summaries.iter().take(5) {
            tracing::info!(
                activity_type = %summary.activity_type,
                count = summary.count,
                miles = summary.total_distance_miles,
                feet = summary.total_elevation_gain_ft,
                moving_time_s = summary.moving_time_s,
                "Category summary"
            );
        }

        let mut report = WrappedReport::default();

        for label in categories {
            let summary = summaries
                .iter()
                .find(|s| &s.activity_type == label)
                .cloned()
                .unwrap_or_else(|| CategorySummary::from_activities(label, activities));

            report.record(
                format!("{}_wrapped", label),
                self.write_category(&summary, athlete, avatar, activities),
            );
            report.record(
                format!("{}_highlights", label),
                self.write_highlights(label, activities),
            );
        }

        if top_k > 0 {
            report.record(
                "top_k_summary".to_string(),
                self.write_top_k(&summaries, athlete, top_k),
            );
        }

        tracing::info!(
            written = report.written.len(),
            failed = report.failures.len(),
            "Wrapped run finished"
        );
        Ok(report)
    }

    fn write_category(
        &self,
        summary: &CategorySummary,
        athlete: &Athlete,
        avatar: &RgbaImage,
        activities: &[Activity],
    ) -> Result<Vec<PathBuf>> {
        let path = self
            .output_dir
            .join(format!("{}_wrapped.png", summary.activity_type));
        SummaryRenderer::new(self.theme, self.fonts, self.assets)
            .write(summary, athlete, avatar, activities, &path)?;
        Ok(vec![path])
    }

    /// Full-size route snapshots of the longest and most liked activity.
    fn write_highlights(&self, label: &str, activities: &[Activity]) -> Result<Vec<PathBuf>> {
        let renderer = HighlightRenderer::new(self.theme, self.fonts);
        let mut written = Vec::with_capacity(2);

        for (metric, caption, suffix) in [
            (Metric::Distance, LONGEST_CAPTION, "longest"),
            (Metric::KudosCount, MOST_LIKED_CAPTION, "most_liked"),
        ] {
            let activity = require_best(activities, label, metric)?;
            let img = renderer.render(activity, self.theme.width, self.theme.height, caption)?;
            let path = self.output_dir.join(format!("{}_{}.png", label, suffix));
            img.save(&path)?;
            tracing::info!(path = %path.display(), activity_id = activity.id, "Saved highlight");
            written.push(path);
        }

        Ok(written)
    }

    fn write_top_k(
        &self,
        summaries: &[CategorySummary],
        athlete: &Athlete,
        k: usize,
    ) -> Result<Vec<PathBuf>> {
        let img = render_top_k(summaries, athlete, k, self.theme, self.fonts)?;
        let path = self
            .output_dir
            .join(format!("strava_summary_{}.png", self.theme.year));
        img.save(&path)?;
        tracing::info!(path = %path.display(), "Saved top-K overview");
        Ok(vec![path])
    }
}
