// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reference layout for story images.
//!
//! Every position and size is written against the 1080×1920 reference
//! canvas. Renderers never scale by hand; they ask a [`Scale`] built for
//! their target canvas to map reference values onto it.

use crate::config::{REFERENCE_HEIGHT, REFERENCE_WIDTH};

/// Named positions on the reference canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    // ─── Category summary ────────────────────────────────────────
    Avatar,
    Title,
    Subtitle,
    BadgeCenter,
    StatRows,
    HighlightsHeading,
    LongestHighlight,
    MostLikedHighlight,

    // ─── Activity highlight ──────────────────────────────────────
    Caption,
    RouteMap,
    AccentBar,
    ActivityName,
    ActivityStats,

    // ─── Top-K overview ──────────────────────────────────────────
    ChartTitle,
    ChartBars,
    ChartAxisLabel,
}

impl Slot {
    /// Top-left `(x, y)` of the element on the reference canvas.
    pub const fn anchor(self) -> (i32, i32) {
        match self {
            Slot::Avatar => (80, 100),
            Slot::Title => (340, 120),
            Slot::Subtitle => (340, 240),
            Slot::BadgeCenter => (830, 640),
            Slot::StatRows => (120, 400),
            Slot::HighlightsHeading => (120, 1150),
            Slot::LongestHighlight => (120, 1220),
            Slot::MostLikedHighlight => (580, 1220),

            Slot::Caption => (90, 40),
            Slot::RouteMap => (90, 180),
            Slot::AccentBar => (90, 1040),
            Slot::ActivityName => (90, 1100),
            Slot::ActivityStats => (90, 1300),

            Slot::ChartTitle => (60, 80),
            Slot::ChartBars => (60, 260),
            Slot::ChartAxisLabel => (60, 1800),
        }
    }
}

// Reference sizes, in reference pixels.
pub const AVATAR_SIZE: u32 = 220;
pub const BADGE_RADIUS: u32 = 180;
pub const STAT_ROW_GAP: i32 = 120;
pub const STAT_VALUE_OFFSET: i32 = 50;
pub const HIGHLIGHT_SIZE: (u32, u32) = (380, 676);

pub const ROUTE_MAP_SIZE: (u32, u32) = (900, 900);
pub const ROUTE_MARGIN: u32 = 20;
pub const ACCENT_BAR_SIZE: (u32, u32) = (150, 12);
pub const ACTIVITY_STAT_GAP: i32 = 200;
pub const ACTIVITY_STAT_VALUE_OFFSET: i32 = 100;

pub const CHART_BAND_HEIGHT: i32 = 300;
pub const CHART_BAR_HEIGHT: u32 = 160;
pub const CHART_BAR_MAX_LENGTH: u32 = 560;

/// Font sizes, in reference pixels.
pub mod font_size {
    pub const TITLE: f32 = 90.0;
    pub const SUBTITLE: f32 = 46.0;
    pub const STAT_LABEL: f32 = 44.0;
    pub const STAT_VALUE: f32 = 64.0;
    pub const HIGHLIGHT_CAPTION: f32 = 128.0;
    pub const ACTIVITY_NAME: f32 = 128.0;
    pub const ACTIVITY_STAT_LABEL: f32 = 86.0;
    pub const ACTIVITY_STAT_VALUE: f32 = 112.0;
    pub const CHART_TITLE: f32 = 64.0;
    pub const CHART_LABEL: f32 = 44.0;
    pub const CHART_ANNOTATION: f32 = 36.0;
}

/// Per-axis factors mapping the reference canvas onto a target canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

impl Scale {
    /// Scale for a canvas of `width` × `height` pixels.
    pub fn for_canvas(width: u32, height: u32) -> Self {
        Self {
            x: f64::from(width) / f64::from(REFERENCE_WIDTH),
            y: f64::from(height) / f64::from(REFERENCE_HEIGHT),
        }
    }

    /// Target position of a slot.
    pub fn at(&self, slot: Slot) -> (i32, i32) {
        let (x, y) = slot.anchor();
        (self.x(x), self.y(y))
    }

    /// Scale a horizontal reference coordinate.
    pub fn x(&self, value: i32) -> i32 {
        (f64::from(value) * self.x) as i32
    }

    /// Scale a vertical reference coordinate.
    pub fn y(&self, value: i32) -> i32 {
        (f64::from(value) * self.y) as i32
    }

    /// Scale a reference size, never collapsing below one pixel.
    pub fn size(&self, (width, height): (u32, u32)) -> (u32, u32) {
        (
            ((f64::from(width) * self.x) as u32).max(1),
            ((f64::from(height) * self.y) as u32).max(1),
        )
    }

    /// Scale a length that must stay round (circles, square avatars).
    pub fn uniform(&self, value: u32) -> u32 {
        ((f64::from(value) * self.x.min(self.y)) as u32).max(1)
    }

    /// Scale a font size; text follows the vertical axis.
    pub fn font(&self, px: f32) -> f32 {
        px * self.y as f32
    }
}
