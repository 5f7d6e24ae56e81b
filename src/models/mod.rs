// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod activity_type;
pub mod summary;

pub use activity::{Activity, ActivityMap, Athlete};
pub use activity_type::ActivityType;
pub use summary::{summarize_by_category, CategorySummary, WeeklyDistance};
