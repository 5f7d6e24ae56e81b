// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Category presentation mapping (label → display title, label → badge icon).

use std::fmt;

/// Activity category as shown on a story.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActivityType {
    Run,
    Ride,
    AlpineSki,
    Hike,
    Walk,
    /// Any label without a dedicated presentation; displayed as-is.
    Other(String),
}

impl ActivityType {
    /// Map a Strava `type` label onto a category.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Run" => ActivityType::Run,
            "Ride" => ActivityType::Ride,
            "AlpineSki" => ActivityType::AlpineSki,
            "Hike" => ActivityType::Hike,
            "Walk" => ActivityType::Walk,
            other => ActivityType::Other(other.to_string()),
        }
    }

    /// The raw Strava label.
    pub fn label(&self) -> &str {
        match self {
            ActivityType::Run => "Run",
            ActivityType::Ride => "Ride",
            ActivityType::AlpineSki => "AlpineSki",
            ActivityType::Hike => "Hike",
            ActivityType::Walk => "Walk",
            ActivityType::Other(label) => label,
        }
    }

    /// Story title for the category.
    pub fn title(&self) -> &str {
        match self {
            ActivityType::Run => "Running",
            ActivityType::Ride => "Cycling",
            ActivityType::AlpineSki => "Skiing",
            ActivityType::Hike => "Hiking",
            ActivityType::Walk => "Walking",
            ActivityType::Other(label) => label,
        }
    }

    /// File name of the badge icon in the asset store.
    pub fn icon_asset(&self) -> String {
        format!("{}.png", self.label())
    }

    /// Label for the count stat row, e.g. `RUNS`.
    pub fn count_label(&self) -> String {
        format!("{}S", self.label().to_uppercase())
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_have_titles() {
        assert_eq!(ActivityType::from_label("Run").title(), "Running");
        assert_eq!(ActivityType::from_label("Ride").title(), "Cycling");
        assert_eq!(ActivityType::from_label("AlpineSki").title(), "Skiing");
        assert_eq!(ActivityType::from_label("Hike").title(), "Hiking");
        assert_eq!(ActivityType::from_label("Walk").title(), "Walking");
    }

    #[test]
    fn test_unknown_label_falls_back_to_raw() {
        let kayak = ActivityType::from_label("Kayaking");
        assert_eq!(kayak, ActivityType::Other("Kayaking".to_string()));
        assert_eq!(kayak.title(), "Kayaking");
        assert_eq!(kayak.icon_asset(), "Kayaking.png");
    }

    #[test]
    fn test_label_round_trip_and_count_label() {
        let ride = ActivityType::from_label("Ride");
        assert_eq!(ride.label(), "Ride");
        assert_eq!(ride.count_label(), "RIDES");
        assert_eq!(ride.icon_asset(), "Ride.png");
    }
}
