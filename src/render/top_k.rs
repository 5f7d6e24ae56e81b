// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Overview chart: activity counts for the most frequent categories.

use crate::config::StoryTheme;
use crate::error::{AppError, Result};
use crate::models::{ActivityType, Athlete, CategorySummary};
use crate::render::canvas::{fill_rect, FontWeight, Fonts};
use crate::render::layout::{
    font_size, Scale, Slot, CHART_BAND_HEIGHT, CHART_BAR_HEIGHT, CHART_BAR_MAX_LENGTH,
};
use image::{Rgba, RgbaImage};

/// Largest K that still fits a story canvas.
pub const MAX_TOP_K: usize = 5;

const CHART_BG: Rgba<u8> = Rgba([240, 240, 240, 255]);
const CHART_TEXT: Rgba<u8> = Rgba([44, 62, 80, 255]);
const BAR_COLORS: [Rgba<u8>; MAX_TOP_K] = [
    Rgba([255, 107, 107, 255]),
    Rgba([78, 205, 196, 255]),
    Rgba([69, 183, 209, 255]),
    Rgba([150, 206, 180, 255]),
    Rgba([255, 234, 167, 255]),
];

/// Draw horizontal count bars for the first `k` summaries.
///
/// `summaries` must already be sorted most frequent first, as returned by
/// [`crate::models::summarize_by_category`].
pub fn render_top_k(
    summaries: &[CategorySummary],
    athlete: &Athlete,
    k: usize,
    theme: &StoryTheme,
    fonts: &Fonts,
) -> Result<RgbaImage> {
    if k == 0 || k > MAX_TOP_K {
        return Err(AppError::InvalidInput(format!(
            "Top-K chart needs 1 <= k <= {}, got {}",
            MAX_TOP_K, k
        )));
    }
    if summaries.is_empty() {
        return Err(AppError::InvalidInput(
            "No activities to chart".to_string(),
        ));
    }

    let top = &summaries[..k.min(summaries.len())];
    let max_count = top.iter().map(|s| s.count).max().unwrap_or(1).max(1);

    let scale = Scale::for_canvas(theme.width, theme.height);
    let mut img = RgbaImage::from_pixel(theme.width, theme.height, CHART_BG);

    fonts.draw_text(
        &mut img,
        FontWeight::Bold,
        scale.font(font_size::CHART_TITLE),
        scale.at(Slot::ChartTitle),
        CHART_TEXT,
        &format!("{}'s {} Strava WRAPPED", athlete.firstname, theme.year),
    );

    let (x, top_y) = Slot::ChartBars.anchor();
    for (i, (summary, color)) in top.iter().zip(BAR_COLORS).enumerate() {
        let band_y = top_y + CHART_BAND_HEIGHT * i as i32;
        let length = bar_length(summary.count, max_count);

        fonts.draw_text(
            &mut img,
            FontWeight::Bold,
            scale.font(font_size::CHART_LABEL),
            (scale.x(x), scale.y(band_y)),
            CHART_TEXT,
            ActivityType::from_label(&summary.activity_type).title(),
        );

        let bar_y = band_y + 60;
        fill_rect(
            &mut img,
            (scale.x(x), scale.y(bar_y)),
            scale.size((length, CHART_BAR_HEIGHT)),
            color,
        );

        let note_x = x + length as i32 + 20;
        for (line, text) in bar_annotation(summary).iter().enumerate() {
            fonts.draw_text(
                &mut img,
                FontWeight::Bold,
                scale.font(font_size::CHART_ANNOTATION),
                (scale.x(note_x), scale.y(bar_y + 45 * line as i32)),
                CHART_TEXT,
                text,
            );
        }
    }

    fonts.draw_text(
        &mut img,
        FontWeight::Regular,
        scale.font(font_size::CHART_LABEL),
        scale.at(Slot::ChartAxisLabel),
        CHART_TEXT,
        "Number of Activities",
    );

    tracing::info!(categories = top.len(), "Rendered top-K overview");
    Ok(img)
}

/// Bar length on the reference canvas, proportional to `count`.
fn bar_length(count: usize, max_count: usize) -> u32 {
    ((count as f64 / max_count as f64) * f64::from(CHART_BAR_MAX_LENGTH)) as u32
}

/// Three annotation lines printed after a bar.
fn bar_annotation(summary: &CategorySummary) -> [String; 3] {
    [
        format!("{} activities", summary.count),
        format!("{:.1} mi", summary.total_distance_miles),
        format!("{:.0} ft", summary.total_elevation_gain_ft),
    ]
}
