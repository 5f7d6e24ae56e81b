// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity highlight: a route snapshot with the activity's headline stats.

use crate::config::StoryTheme;
use crate::error::{AppError, Result};
use crate::format::{format_duration, meters_to_miles};
use crate::models::Activity;
use crate::render::canvas::{fill_rect, paste, FontWeight, Fonts};
use crate::render::layout::{
    font_size, Scale, Slot, ACCENT_BAR_SIZE, ACTIVITY_STAT_GAP, ACTIVITY_STAT_VALUE_OFFSET,
    ROUTE_MAP_SIZE,
};
use crate::render::route::{render_route, RouteStyle};
use image::RgbaImage;

/// Caption for the longest activity of a category.
pub const LONGEST_CAPTION: &str = "LONGEST ACTIVITY";
/// Caption for the most liked activity of a category.
pub const MOST_LIKED_CAPTION: &str = "MOST LIKED ACTIVITY";

/// Renders single-activity highlight cards.
pub struct HighlightRenderer<'a> {
    theme: &'a StoryTheme,
    fonts: &'a Fonts,
}

impl<'a> HighlightRenderer<'a> {
    pub fn new(theme: &'a StoryTheme, fonts: &'a Fonts) -> Self {
        Self { theme, fonts }
    }

    /// Build a `width` × `height` card for `activity`.
    pub fn render(
        &self,
        activity: &Activity,
        width: u32,
        height: u32,
        caption: &str,
    ) -> Result<RgbaImage> {
        if width == 0 || height == 0 {
            return Err(AppError::InvalidInput(format!(
                "Highlight canvas must be non-empty, got {}x{}",
                width, height
            )));
        }

        let theme = self.theme;
        let scale = Scale::for_canvas(width, height);
        let mut img = RgbaImage::from_pixel(width, height, theme.map_bg);

        self.fonts.draw_text(
            &mut img,
            FontWeight::Bold,
            scale.font(font_size::HIGHLIGHT_CAPTION),
            scale.at(Slot::Caption),
            theme.text_primary,
            caption,
        );

        let route = activity.route()?;
        let (map_width, map_height) = scale.size(ROUTE_MAP_SIZE);
        let map = render_route(&route, map_width, map_height, &RouteStyle::for_theme(theme))?;
        paste(&mut img, &map, scale.at(Slot::RouteMap));

        fill_rect(
            &mut img,
            scale.at(Slot::AccentBar),
            scale.size(ACCENT_BAR_SIZE),
            theme.accent,
        );

        self.fonts.draw_text(
            &mut img,
            FontWeight::Bold,
            scale.font(font_size::ACTIVITY_NAME),
            scale.at(Slot::ActivityName),
            theme.text_primary,
            &activity.name,
        );

        let (stats_x, mut stats_y) = scale.at(Slot::ActivityStats);
        for (label, value) in activity_stats(activity) {
            self.fonts.draw_text(
                &mut img,
                FontWeight::Regular,
                scale.font(font_size::ACTIVITY_STAT_LABEL),
                (stats_x, stats_y),
                theme.text_muted,
                label,
            );
            self.fonts.draw_text(
                &mut img,
                FontWeight::Bold,
                scale.font(font_size::ACTIVITY_STAT_VALUE),
                (stats_x, stats_y + scale.y(ACTIVITY_STAT_VALUE_OFFSET)),
                theme.text_primary,
                &value,
            );
            stats_y += scale.y(ACTIVITY_STAT_GAP);
        }

        tracing::debug!(
            activity_id = activity.id,
            caption,
            width,
            height,
            "Rendered activity highlight"
        );
        Ok(img)
    }
}

/// Label/value rows shown under the route.
pub fn activity_stats(activity: &Activity) -> [(&'static str, String); 3] {
    [
        ("KUDOS", activity.kudos_count.to_string()),
        (
            "DISTANCE",
            format!("{:.2} miles", meters_to_miles(activity.distance)),
        ),
        ("TIME", format_duration(activity.moving_time)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityMap;
    use chrono::{TimeZone, Utc};

    fn make_activity(polyline: Option<&str>) -> Activity {
        Activity {
            id: 7,
            name: "Long Ridge Loop".to_string(),
            activity_type: "Run".to_string(),
            start_date: Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap(),
            distance: 16093.44,
            moving_time: 5430,
            total_elevation_gain: 400.0,
            kudos_count: 12,
            map: ActivityMap {
                summary_polyline: polyline.map(String::from),
            },
        }
    }

    #[test]
    fn test_activity_stats_rows() {
        let stats = activity_stats(&make_activity(None));
        assert_eq!(stats[0], ("KUDOS", "12".to_string()));
        assert_eq!(stats[1], ("DISTANCE", "10.00 miles".to_string()));
        assert_eq!(stats[2], ("TIME", "1h 30m".to_string()));
    }

    #[test]
    fn test_render_has_requested_size_and_accent_bar() {
        let theme = StoryTheme::for_year(2025);
        let fonts = Fonts::new_mock();
        let renderer = HighlightRenderer::new(&theme, &fonts);

        let img = renderer
            .render(
                &make_activity(Some("gn~eFhmdjVs@gAqAeBuAgB")),
                540,
                960,
                LONGEST_CAPTION,
            )
            .unwrap();

        assert_eq!(img.dimensions(), (540, 960));
        // Accent bar at reference (90, 1040) on a half-size card.
        assert_eq!(*img.get_pixel(50, 522), theme.accent);
        // Map background at reference (100, 190).
        assert_eq!(*img.get_pixel(46, 92), theme.route_bg);
        assert_eq!(*img.get_pixel(5, 5), theme.map_bg);
    }

    #[test]
    fn test_render_without_polyline_fails() {
        let theme = StoryTheme::for_year(2025);
        let fonts = Fonts::new_mock();
        let renderer = HighlightRenderer::new(&theme, &fonts);

        let result = renderer.render(&make_activity(None), 540, 960, MOST_LIKED_CAPTION);
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}
