//! Placeholder content
//!
//! No weather or recommendation source is attached yet. These literals are
//! what the dashboard publishes until one is.

pub const WEATHER_SUMMARY: &str = "75°F - Perfect date weather";
pub const WEATHER_ADVICE: &str = "Perfect for outdoor dates! 😊";
pub const SELECTED_DATE_WEATHER: &str = "Sunny";

pub const WEEKEND_HEADER: &str = "Weekend looks great! 🌟";
pub const AI_SUGGESTED_CHIP: &str = "AI Suggested";

pub const DISCOVER_PLACEHOLDER: &str = "Discover\nComing Soon 🔍";
pub const MOMENTS_PLACEHOLDER: &str = "Moments\nComing Soon 📸";

/// Status shown when recommendations are requested.
pub const RECOMMENDATIONS_UNAVAILABLE: &str = "no recommendation source attached yet";
