// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time handling.

use crate::error::{AppError, Result};
use chrono::{DateTime, TimeZone, Utc};

/// Midnight UTC on 1 January of `year`.
pub fn start_of_year(year: i32) -> Result<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| AppError::InvalidInput(format!("Invalid year: {}", year)))
}
