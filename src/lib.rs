// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava Wrapped: year-in-review story images from Strava activities.
//!
//! This crate aggregates an athlete's activities per category (totals,
//! weekly distance over complete weeks, standout activities) and lays the
//! results out as vertical story images with route snapshots.

pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod render;
pub mod services;
pub mod time_utils;
