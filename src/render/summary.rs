// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Category summary story.
//!
//! Composes, top to bottom:
//! 1. Gradient background
//! 2. Circular avatar, category title and subtitle
//! 3. Category badge
//! 4. Stat rows (totals plus weekly rollup)
//! 5. Longest and most liked activity highlights, side by side

use crate::config::StoryTheme;
use crate::error::{AppError, Result};
use crate::format::{format_duration, with_thousands_separators};
use crate::models::{Activity, ActivityType, Athlete, CategorySummary, WeeklyDistance};
use crate::render::canvas::{
    circular_crop, fill_circle, paste, vertical_gradient, FontWeight, Fonts,
};
use crate::render::highlight::{HighlightRenderer, LONGEST_CAPTION, MOST_LIKED_CAPTION};
use crate::render::layout::{
    font_size, Scale, Slot, AVATAR_SIZE, BADGE_RADIUS, HIGHLIGHT_SIZE, STAT_ROW_GAP,
    STAT_VALUE_OFFSET,
};
use crate::services::assets::AssetStore;
use crate::services::best::{require_best, Metric};
use crate::services::weekly::weekly_distance;
use image::imageops::FilterType;
use image::RgbaImage;
use std::path::Path;

/// Builds one summary story per category.
pub struct SummaryRenderer<'a> {
    theme: &'a StoryTheme,
    fonts: &'a Fonts,
    assets: &'a AssetStore,
}

impl<'a> SummaryRenderer<'a> {
    pub fn new(theme: &'a StoryTheme, fonts: &'a Fonts, assets: &'a AssetStore) -> Self {
        Self {
            theme,
            fonts,
            assets,
        }
    }

    /// Render the story for `summary.activity_type`.
    ///
    /// `activities` may contain other categories; only matching activities
    /// feed the weekly rollup and the highlights. Fails with
    /// `NoQualifyingActivity` when either highlight has no winner.
    pub fn render(
        &self,
        summary: &CategorySummary,
        athlete: &Athlete,
        avatar: &RgbaImage,
        activities: &[Activity],
    ) -> Result<RgbaImage> {
        let label = summary.activity_type.as_str();
        if summary.count == 0 {
            return Err(AppError::InvalidInput(format!(
                "No {} activities to summarize",
                label
            )));
        }
        if athlete.firstname.trim().is_empty() {
            return Err(AppError::InvalidInput("Athlete has no first name".to_string()));
        }

        let activity_type = ActivityType::from_label(label);
        let category: Vec<Activity> = activities
            .iter()
            .filter(|a| a.is_type(label))
            .cloned()
            .collect();

        // Resolve everything fallible before touching the canvas.
        let longest = require_best(&category, label, Metric::Distance)?;
        let most_liked = require_best(&category, label, Metric::KudosCount)?;
        let icon = self.assets.icon(&activity_type)?;
        let weekly = weekly_distance(&category);

        let theme = self.theme;
        let scale = Scale::for_canvas(theme.width, theme.height);
        let mut img = vertical_gradient(theme.width, theme.height, theme.bg_top, theme.bg_bottom);

        self.draw_header(&mut img, &scale, &activity_type, athlete, avatar);
        draw_badge(&mut img, &scale, theme, &icon);
        self.draw_stats(&mut img, &scale, &stat_rows(summary, &weekly, &activity_type));

        self.fonts.draw_text(
            &mut img,
            FontWeight::Bold,
            scale.font(font_size::STAT_LABEL),
            scale.at(Slot::HighlightsHeading),
            theme.text_muted,
            "HIGHLIGHTS",
        );

        let highlights = HighlightRenderer::new(theme, self.fonts);
        let (card_width, card_height) = scale.size(HIGHLIGHT_SIZE);
        for (activity, caption, slot) in [
            (longest, LONGEST_CAPTION, Slot::LongestHighlight),
            (most_liked, MOST_LIKED_CAPTION, Slot::MostLikedHighlight),
        ] {
            let card = highlights.render(activity, card_width, card_height, caption)?;
            paste(&mut img, &card, scale.at(slot));
        }

        tracing::info!(
            activity_type = label,
            count = summary.count,
            weeks = weekly.weeks,
            longest_id = longest.id,
            most_liked_id = most_liked.id,
            "Rendered category summary"
        );
        Ok(img)
    }

    /// Render and write the story to `path` (format from the extension).
    pub fn write(
        &self,
        summary: &CategorySummary,
        athlete: &Athlete,
        avatar: &RgbaImage,
        activities: &[Activity],
        path: &Path,
    ) -> Result<()> {
        let img = self.render(summary, athlete, avatar, activities)?;
        img.save(path)?;
        tracing::info!(path = %path.display(), "Saved category summary");
        Ok(())
    }

    fn draw_header(
        &self,
        img: &mut RgbaImage,
        scale: &Scale,
        activity_type: &ActivityType,
        athlete: &Athlete,
        avatar: &RgbaImage,
    ) {
        let theme = self.theme;

        let side = scale.uniform(AVATAR_SIZE);
        let avatar = circular_crop(image::imageops::resize(
            avatar,
            side,
            side,
            FilterType::Lanczos3,
        ));
        paste(img, &avatar, scale.at(Slot::Avatar));

        self.fonts.draw_text(
            img,
            FontWeight::Bold,
            scale.font(font_size::TITLE),
            scale.at(Slot::Title),
            theme.text_primary,
            activity_type.title(),
        );
        self.fonts.draw_text(
            img,
            FontWeight::Regular,
            scale.font(font_size::SUBTITLE),
            scale.at(Slot::Subtitle),
            theme.text_muted,
            &format!("{}'s {} WRAPPED", athlete.firstname, theme.year),
        );
    }

    fn draw_stats(&self, img: &mut RgbaImage, scale: &Scale, rows: &[(String, String)]) {
        let theme = self.theme;
        let (x, top) = scale.at(Slot::StatRows);

        for (i, (label, value)) in rows.iter().enumerate() {
            let y = top + scale.y(STAT_ROW_GAP * i as i32);
            self.fonts.draw_text(
                img,
                FontWeight::Regular,
                scale.font(font_size::STAT_LABEL),
                (x, y),
                theme.text_muted,
                label,
            );
            self.fonts.draw_text(
                img,
                FontWeight::Bold,
                scale.font(font_size::STAT_VALUE),
                (x, y + scale.y(STAT_VALUE_OFFSET)),
                theme.text_primary,
                value,
            );
        }
    }
}

/// Accent disc with the category icon centred on it.
fn draw_badge(img: &mut RgbaImage, scale: &Scale, theme: &StoryTheme, icon: &RgbaImage) {
    let (cx, cy) = scale.at(Slot::BadgeCenter);
    let radius = scale.uniform(BADGE_RADIUS);
    fill_circle(img, (cx, cy), radius as i32, theme.accent);

    let icon = image::imageops::resize(icon, 2 * radius, 2 * radius, FilterType::Lanczos3);
    paste(img, &icon, (cx - radius as i32, cy - radius as i32));
}

/// Label/value rows for the stats column, in display order.
pub fn stat_rows(
    summary: &CategorySummary,
    weekly: &WeeklyDistance,
    activity_type: &ActivityType,
) -> Vec<(String, String)> {
    vec![
        (
            activity_type.count_label(),
            with_thousands_separators(summary.count),
        ),
        (
            "DISTANCE".to_string(),
            format!(
                "{} miles",
                with_thousands_separators(summary.total_distance_miles as i64)
            ),
        ),
        (
            "ELEVATION".to_string(),
            format!(
                "{} ft",
                with_thousands_separators(summary.total_elevation_gain_ft as i64)
            ),
        ),
        ("TIME".to_string(), format_duration(summary.moving_time_s)),
        (
            "AVG WEEKLY DISTANCE".to_string(),
            format!("{:.1} miles", weekly.average_miles),
        ),
        (
            "PEAK WEEKLY DISTANCE".to_string(),
            format!("{:.1} miles", weekly.peak_miles),
        ),
    ]
}
