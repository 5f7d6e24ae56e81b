// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - aggregation logic and external collaborators.

pub mod assets;
pub mod avatar;
pub mod best;
pub mod strava;
pub mod weekly;
pub mod wrapped;

pub use assets::AssetStore;
pub use avatar::decode_avatar;
pub use best::{require_best, select_best, Metric};
pub use strava::StravaClient;
pub use weekly::weekly_distance;
pub use wrapped::{ArtifactFailure, WrappedGenerator, WrappedReport};
