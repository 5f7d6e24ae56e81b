// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Unit conversions and display formatting for story text.

use std::fmt::Display;

/// Miles per meter.
pub const METERS_TO_MILES: f64 = 0.000621371;

/// Feet per meter.
pub const METERS_TO_FEET: f64 = 3.28084;

/// Convert meters to miles.
pub fn meters_to_miles(meters: f64) -> f64 {
    meters * METERS_TO_MILES
}

/// Convert meters to feet.
pub fn meters_to_feet(meters: f64) -> f64 {
    meters * METERS_TO_FEET
}

/// Format a duration as `"<H>h <M>m"`.
///
/// Hours include whole days; minutes are floored.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    format!("{}h {}m", hours, minutes)
}

/// Insert a `,` between every three digits of the integer part.
///
/// A leading `-` and any fractional suffix are kept as written.
pub fn with_thousands_separators(n: impl Display) -> String {
    let s = n.to_string();
    let (integer, fraction) = match s.find('.') {
        Some(idx) => s.split_at(idx),
        None => (s.as_str(), ""),
    };
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}{}", sign, grouped, fraction)
}
