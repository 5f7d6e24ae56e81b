// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Badge icon lookup by category.

use crate::error::{AppError, Result};
use crate::models::ActivityType;
use image::RgbaImage;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Local store of badge icons, keyed by file name (`Run.png`, ...).
#[derive(Default, Clone)]
pub struct AssetStore {
    dir: Option<PathBuf>,
    preloaded: HashMap<String, RgbaImage>,
}

impl AssetStore {
    /// Store backed by a directory on disk.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: Some(dir.as_ref().to_path_buf()),
            preloaded: HashMap::new(),
        }
    }

    /// Store with no directory; only inserted images resolve.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Register an image under `name`, shadowing any file of that name.
    pub fn insert(&mut self, name: impl Into<String>, img: RgbaImage) {
        self.preloaded.insert(name.into(), img);
    }

    /// Badge icon for a category.
    pub fn icon(&self, activity_type: &ActivityType) -> Result<RgbaImage> {
        self.load(&activity_type.icon_asset())
    }

    /// Load an asset by file name.
    pub fn load(&self, name: &str) -> Result<RgbaImage> {
        if let Some(img) = self.preloaded.get(name) {
            return Ok(img.clone());
        }

        let path = self
            .dir
            .as_ref()
            .map(|dir| dir.join(name))
            .filter(|path| path.is_file())
            .ok_or_else(|| AppError::AssetNotFound(name.to_string()))?;

        tracing::debug!(path = %path.display(), "Loading asset");
        Ok(image::open(&path)?.to_rgba8())
    }
}
