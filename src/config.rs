//! Run configuration loaded from environment variables, plus the immutable
//! presentation settings handed to every renderer.

use chrono::Datelike;
use image::Rgba;
use std::env;
use std::path::PathBuf;

/// Reference canvas width all layout coordinates are written against.
pub const REFERENCE_WIDTH: u32 = 1080;
/// Reference canvas height all layout coordinates are written against.
pub const REFERENCE_HEIGHT: u32 = 1920;

/// Run configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Strava access token; when absent activities are read from files.
    pub strava_access_token: Option<String>,
    /// Activities JSON (offline mode)
    pub activities_file: PathBuf,
    /// Athlete JSON (offline mode)
    pub athlete_file: PathBuf,
    /// Calendar year being wrapped
    pub year: i32,
    /// Where story images are written
    pub output_dir: PathBuf,
    /// Directory holding `<label>.png` badge icons
    pub assets_dir: PathBuf,
    pub fonts: FontPaths,
    /// Category labels to build stories for
    pub categories: Vec<String>,
    /// Number of categories in the overview chart (0 disables it)
    pub top_k: usize,
}

/// TrueType font files used for story text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontPaths {
    pub bold: PathBuf,
    pub regular: PathBuf,
}

impl Default for FontPaths {
    fn default() -> Self {
        Self {
            bold: PathBuf::from("/System/Library/Fonts/Supplemental/Arial Bold.ttf"),
            regular: PathBuf::from("/System/Library/Fonts/Supplemental/Arial.ttf"),
        }
    }
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            strava_access_token: None,
            activities_file: PathBuf::from("activities.json"),
            athlete_file: PathBuf::from("athlete.json"),
            year: 2025,
            output_dir: PathBuf::from("."),
            assets_dir: PathBuf::from("assets"),
            fonts: FontPaths::default(),
            categories: vec!["Run".to_string(), "Ride".to_string()],
            top_k: 5,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = FontPaths::default();

        Ok(Self {
            strava_access_token: env::var("STRAVA_ACCESS_TOKEN")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            activities_file: env::var("ACTIVITIES_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("activities.json")),
            athlete_file: env::var("ATHLETE_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("athlete.json")),
            year: match env::var("WRAPPED_YEAR") {
                Ok(v) => v.trim().parse().map_err(|_| ConfigError::Invalid {
                    name: "WRAPPED_YEAR",
                    value: v,
                })?,
                Err(_) => chrono::Utc::now().year(),
            },
            output_dir: env::var("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            assets_dir: env::var("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("assets")),
            fonts: FontPaths {
                bold: env::var("FONT_BOLD").map(PathBuf::from).unwrap_or(defaults.bold),
                regular: env::var("FONT_REGULAR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.regular),
            },
            categories: parse_categories(
                &env::var("WRAPPED_CATEGORIES").unwrap_or_else(|_| "Run,Ride".to_string()),
            )?,
            top_k: match env::var("WRAPPED_TOP_K") {
                Ok(v) => v.trim().parse().map_err(|_| ConfigError::Invalid {
                    name: "WRAPPED_TOP_K",
                    value: v,
                })?,
                Err(_) => 5,
            },
        })
    }
}

fn parse_categories(raw: &str) -> Result<Vec<String>, ConfigError> {
    let categories: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from)
        .collect();
    if categories.is_empty() {
        return Err(ConfigError::Missing("WRAPPED_CATEGORIES"));
    }
    Ok(categories)
}

/// Colours and canvas size for story images.
///
/// Built once per run and shared by reference; never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryTheme {
    pub width: u32,
    pub height: u32,
    pub year: i32,
    pub bg_top: Rgba<u8>,
    pub bg_bottom: Rgba<u8>,
    pub map_bg: Rgba<u8>,
    pub route_bg: Rgba<u8>,
    pub accent: Rgba<u8>,
    pub text_primary: Rgba<u8>,
    pub text_muted: Rgba<u8>,
}

impl StoryTheme {
    /// The standard 1080×1920 dark theme for the given year.
    pub fn for_year(year: i32) -> Self {
        Self {
            width: REFERENCE_WIDTH,
            height: REFERENCE_HEIGHT,
            year,
            bg_top: Rgba([18, 18, 20, 255]),
            bg_bottom: Rgba([30, 30, 35, 255]),
            map_bg: Rgba([15, 15, 18, 255]),
            route_bg: Rgba([20, 20, 24, 255]),
            accent: Rgba([252, 76, 2, 255]),
            text_primary: Rgba([255, 255, 255, 255]),
            text_muted: Rgba([180, 180, 185, 255]),
        }
    }

    /// Same palette on a different canvas size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("WRAPPED_YEAR", "2024");
        env::set_var("WRAPPED_CATEGORIES", " Run, Hike ,,");
        env::set_var("WRAPPED_TOP_K", "3");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.year, 2024);
        assert_eq!(config.categories, vec!["Run", "Hike"]);
        assert_eq!(config.top_k, 3);
    }

    #[test]
    fn test_parse_categories_rejects_empty() {
        assert!(matches!(
            parse_categories(" , "),
            Err(ConfigError::Missing("WRAPPED_CATEGORIES"))
        ));
    }

    #[test]
    fn test_theme_with_size_keeps_palette() {
        let theme = StoryTheme::for_year(2025).with_size(540, 960);
        assert_eq!((theme.width, theme.height), (540, 960));
        assert_eq!(theme.accent, Rgba([252, 76, 2, 255]));
        assert_eq!(theme.year, 2025);
    }
}
