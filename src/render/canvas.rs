// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Raster primitives shared by the story renderers.

use crate::config::FontPaths;
use crate::error::{AppError, Result};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;
use rusttype::{point, Font, Scale as FontScale};
use std::fs;
use std::path::Path;

/// Font weight selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// Loaded story fonts.
pub struct Fonts {
    /// `None` in mock mode; text drawing is then skipped.
    faces: Option<(Font<'static>, Font<'static>)>,
}

impl Fonts {
    /// Load the bold and regular faces from disk.
    pub fn load(paths: &FontPaths) -> Result<Self> {
        let bold = load_font(&paths.bold)?;
        let regular = load_font(&paths.regular)?;
        Ok(Self {
            faces: Some((bold, regular)),
        })
    }

    /// Fonts that render nothing, for tests and headless layout checks.
    pub fn new_mock() -> Self {
        Self { faces: None }
    }

    fn face(&self, weight: FontWeight) -> Option<&Font<'static>> {
        self.faces.as_ref().map(|(bold, regular)| match weight {
            FontWeight::Bold => bold,
            FontWeight::Regular => regular,
        })
    }

    /// Draw `text` with its top-left corner at `(x, y)`.
    ///
    /// Glyphs falling outside the canvas are clipped.
    pub fn draw_text(
        &self,
        img: &mut RgbaImage,
        weight: FontWeight,
        px: f32,
        (x, y): (i32, i32),
        color: Rgba<u8>,
        text: &str,
    ) {
        let Some(font) = self.face(weight) else {
            return;
        };

        let scale = FontScale::uniform(px);
        let v_metrics = font.v_metrics(scale);
        let start = point(x as f32, y as f32 + v_metrics.ascent);

        for glyph in font.layout(text, scale, start) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                let tx = gx as i32 + bb.min.x;
                let ty = gy as i32 + bb.min.y;
                if tx < 0 || ty < 0 || tx >= img.width() as i32 || ty >= img.height() as i32 {
                    return;
                }
                blend(img.get_pixel_mut(tx as u32, ty as u32), color, coverage);
            });
        }
    }
}

fn load_font(path: &Path) -> Result<Font<'static>> {
    let bytes = fs::read(path)
        .map_err(|e| AppError::Font(format!("{}: {}", path.display(), e)))?;
    Font::try_from_vec(bytes)
        .ok_or_else(|| AppError::Font(format!("{}: not a TrueType font", path.display())))
}

/// Alpha-blend `color` over `dst` with the given coverage in `[0, 1]`.
fn blend(dst: &mut Rgba<u8>, color: Rgba<u8>, coverage: f32) {
    let a = coverage.clamp(0.0, 1.0) * f32::from(color.0[3]) / 255.0;
    if a <= 0.0 {
        return;
    }
    let inv = 1.0 - a;
    for c in 0..3 {
        dst.0[c] = (f32::from(color.0[c]) * a + f32::from(dst.0[c]) * inv) as u8;
    }
    dst.0[3] = dst.0[3].max((a * 255.0) as u8);
}

/// A canvas filled top-to-bottom with a linear gradient.
pub fn vertical_gradient(width: u32, height: u32, top: Rgba<u8>, bottom: Rgba<u8>) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);
    for y in 0..height {
        let ratio = f64::from(y) / f64::from(height);
        let mix = |c: usize| {
            (f64::from(top.0[c]) * (1.0 - ratio) + f64::from(bottom.0[c]) * ratio) as u8
        };
        let row = Rgba([mix(0), mix(1), mix(2), 255]);
        for x in 0..width {
            img.put_pixel(x, y, row);
        }
    }
    img
}

/// Make everything outside the inscribed ellipse transparent.
pub fn circular_crop(mut img: RgbaImage) -> RgbaImage {
    let (w, h) = (f64::from(img.width()), f64::from(img.height()));
    let (cx, cy) = (w / 2.0, h / 2.0);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        // Sample pixel centres against the ellipse x²/a² + y²/b² <= 1.
        let dx = (f64::from(x) + 0.5 - cx) / cx;
        let dy = (f64::from(y) + 0.5 - cy) / cy;
        if dx * dx + dy * dy > 1.0 {
            pixel.0[3] = 0;
        }
    }
    img
}

/// Alpha-composite `top` onto `base` at `(x, y)`.
pub fn paste(base: &mut RgbaImage, top: &RgbaImage, (x, y): (i32, i32)) {
    image::imageops::overlay(base, top, i64::from(x), i64::from(y));
}

/// Fill a circle of `radius` around `center`.
pub fn fill_circle(img: &mut RgbaImage, center: (i32, i32), radius: i32, color: Rgba<u8>) {
    draw_filled_circle_mut(img, center, radius, color);
}

/// Fill an axis-aligned rectangle.
pub fn fill_rect(img: &mut RgbaImage, (x, y): (i32, i32), (w, h): (u32, u32), color: Rgba<u8>) {
    draw_filled_rect_mut(img, Rect::at(x, y).of_size(w.max(1), h.max(1)), color);
}

/// Stroke a polyline with a round brush, giving rounded joints and caps.
pub fn stroke_polyline(img: &mut RgbaImage, points: &[(i32, i32)], width: u32, color: Rgba<u8>) {
    let radius = (width / 2).max(1) as i32;

    if let [only] = points {
        fill_circle(img, *only, radius, color);
        return;
    }

    for segment in points.windows(2) {
        let (x0, y0) = segment[0];
        let (x1, y1) = segment[1];
        let steps = (x1 - x0).abs().max((y1 - y0).abs()).max(1);
        for i in 0..=steps {
            let t = f64::from(i) / f64::from(steps);
            let x = f64::from(x0) + f64::from(x1 - x0) * t;
            let y = f64::from(y0) + f64::from(y1 - y0) * t;
            fill_circle(img, (x.round() as i32, y.round() as i32), radius, color);
        }
    }
}
