// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Avatar decoding for story headers.

use crate::error::Result;
use image::imageops::FilterType;
use image::RgbaImage;

/// Decode downloaded avatar bytes and resize to a `size` × `size` square.
pub fn decode_avatar(bytes: &[u8], size: u32) -> Result<RgbaImage> {
    let img = image::load_from_memory(bytes)?.to_rgba8();
    Ok(image::imageops::resize(&img, size, size, FilterType::Lanczos3))
}
