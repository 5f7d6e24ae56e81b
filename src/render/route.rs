// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Route projection: geographic coordinates onto a fixed-size raster.
//!
//! Longitude maps to x and latitude to inverted y (north up). Each axis is
//! stretched independently to fill the canvas minus a margin.

use crate::config::StoryTheme;
use crate::error::{AppError, Result};
use crate::render::canvas::stroke_polyline;
use crate::render::layout::ROUTE_MARGIN;
use geo::{BoundingRect, Coord, LineString};
use image::{Rgba, RgbaImage};

/// Added to each bounding-box span so a flat or single-point route
/// projects onto a line instead of dividing by zero.
const SPAN_EPSILON: f64 = 1e-9;

/// Stroke and background for a route snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteStyle {
    pub line_width: u32,
    pub line_color: Rgba<u8>,
    pub background: Rgba<u8>,
    /// Inset on every side, in pixels
    pub margin: u32,
}

impl RouteStyle {
    pub fn for_theme(theme: &StoryTheme) -> Self {
        Self {
            line_width: 6,
            line_color: theme.accent,
            background: theme.route_bg,
            margin: ROUTE_MARGIN,
        }
    }
}

/// Linear mapping from a route's bounding box to pixel space.
#[derive(Debug, Clone, Copy)]
pub struct RouteProjection {
    min: Coord<f64>,
    span: Coord<f64>,
    inner_width: f64,
    inner_height: f64,
    margin: f64,
}

impl RouteProjection {
    /// Fit `route` into a `width` × `height` canvas inset by `margin`.
    pub fn new(route: &LineString<f64>, width: u32, height: u32, margin: u32) -> Result<Self> {
        let bounds = route
            .bounding_rect()
            .ok_or_else(|| AppError::InvalidInput("Route has no coordinates".to_string()))?;

        Ok(Self {
            min: bounds.min(),
            span: Coord {
                x: bounds.width() + SPAN_EPSILON,
                y: bounds.height() + SPAN_EPSILON,
            },
            inner_width: f64::from(width.saturating_sub(2 * margin)),
            inner_height: f64::from(height.saturating_sub(2 * margin)),
            margin: f64::from(margin),
        })
    }

    /// Pixel position of a `(lon, lat)` coordinate.
    pub fn project(&self, coord: Coord<f64>) -> (i32, i32) {
        let x = (coord.x - self.min.x) / self.span.x;
        let y = (coord.y - self.min.y) / self.span.y;
        (
            (x * self.inner_width + self.margin) as i32,
            ((1.0 - y) * self.inner_height + self.margin) as i32,
        )
    }
}

/// Render `route` as a single stroked polyline on a filled canvas of
/// exactly `width` × `height` pixels.
pub fn render_route(
    route: &LineString<f64>,
    width: u32,
    height: u32,
    style: &RouteStyle,
) -> Result<RgbaImage> {
    if width == 0 || height == 0 {
        return Err(AppError::InvalidInput(format!(
            "Route canvas must be non-empty, got {}x{}",
            width, height
        )));
    }

    let projection = RouteProjection::new(route, width, height, style.margin)?;
    let points: Vec<(i32, i32)> = route.coords().map(|c| projection.project(*c)).collect();

    let mut img = RgbaImage::from_pixel(width, height, style.background);
    stroke_polyline(&mut img, &points, style.line_width, style.line_color);

    tracing::debug!(points = points.len(), width, height, "Rendered route");
    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> RouteStyle {
        RouteStyle::for_theme(&StoryTheme::for_year(2025))
    }

    #[test]
    fn test_identical_points_do_not_divide_by_zero() {
        let route = LineString::from(vec![(-122.1, 37.4), (-122.1, 37.4)]);

        let img = render_route(&route, 300, 200, &style()).unwrap();

        assert_eq!(img.dimensions(), (300, 200));
    }

    #[test]
    fn test_extreme_points_stay_inside_margin() {
        let route = LineString::from(vec![(-122.2, 37.3), (-122.0, 37.5), (-122.1, 37.35)]);
        let projection = RouteProjection::new(&route, 400, 300, 20).unwrap();

        for coord in route.coords() {
            let (x, y) = projection.project(*coord);
            assert!((20..=380).contains(&x), "x = {} outside inset", x);
            assert!((20..=280).contains(&y), "y = {} outside inset", y);
        }

        // South-west corner lands bottom-left, north-east top-right.
        assert_eq!(projection.project(Coord { x: -122.2, y: 37.3 }), (20, 280));
        assert_eq!(projection.project(Coord { x: -122.0, y: 37.5 }), (379, 20));
    }

    #[test]
    fn test_north_is_up() {
        let route = LineString::from(vec![(0.0, 0.0), (0.0, 1.0)]);
        let projection = RouteProjection::new(&route, 100, 100, 10).unwrap();

        let (_, south_y) = projection.project(Coord { x: 0.0, y: 0.0 });
        let (_, north_y) = projection.project(Coord { x: 0.0, y: 1.0 });
        assert!(north_y < south_y);
    }

    #[test]
    fn test_empty_route_is_invalid() {
        let route: LineString<f64> = LineString::new(vec![]);
        assert!(matches!(
            render_route(&route, 100, 100, &style()),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_route_is_stroked_in_line_color() {
        let route = LineString::from(vec![(0.0, 0.0), (1.0, 0.0)]);
        let s = style();

        let img = render_route(&route, 100, 100, &s).unwrap();

        // A flat route collapses onto the bottom edge of the inset.
        assert_eq!(*img.get_pixel(50, 80), s.line_color);
        assert_eq!(*img.get_pixel(50, 20), s.background);
    }
}
