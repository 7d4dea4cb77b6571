//! Home dashboard state holder.
//!
//! Holds the four display-ready texts of the home screen, each in its own
//! [`Observable`] so a surface can bind to exactly the fields it shows.
//! Values are computed once at construction and republished only through
//! [`DashboardState::update`] or the operation methods.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        calendar::{days_between, format_days_together, Clock},
        mock,
    },
    model::observable::Observable,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    DateSelected { date: NaiveDate },
    WeatherRefreshRequested,
    RecommendationsRefreshRequested,
}

/// Where the published content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceStatus {
    /// Placeholder literals were published.
    Mock,
    /// Nothing is attached; nothing was published.
    Unavailable,
}

/// Clones are handles to the same cells.
#[derive(Debug, Clone)]
pub struct DashboardState {
    start_date: NaiveDate,
    days_together_text: Observable<String>,
    weather_summary_text: Observable<String>,
    weather_advice_text: Observable<String>,
    selected_date_weather_text: Observable<String>,
}

impl DashboardState {
    /// Builds the holder with every field already published.
    pub fn new(start_date: NaiveDate, clock: &dyn Clock) -> Self {
        let days = days_between(start_date, clock.today());
        log::debug!("dashboard initialized: start={start_date} days={days}");

        Self {
            start_date,
            days_together_text: Observable::new(format_days_together(days)),
            weather_summary_text: Observable::new(mock::WEATHER_SUMMARY.to_string()),
            weather_advice_text: Observable::new(mock::WEATHER_ADVICE.to_string()),
            selected_date_weather_text: Observable::new(mock::SELECTED_DATE_WEATHER.to_string()),
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn days_together_text(&self) -> &Observable<String> {
        &self.days_together_text
    }

    pub fn weather_summary_text(&self) -> &Observable<String> {
        &self.weather_summary_text
    }

    pub fn weather_advice_text(&self) -> &Observable<String> {
        &self.weather_advice_text
    }

    pub fn selected_date_weather_text(&self) -> &Observable<String> {
        &self.selected_date_weather_text
    }

    /// Publishes the weather for `date`. No source is keyed by date yet, so
    /// this is the placeholder for every date.
    pub fn select_date(&self, date: NaiveDate) -> SourceStatus {
        log::debug!("date selected: {date}");
        self.selected_date_weather_text
            .set(mock::SELECTED_DATE_WEATHER.to_string());
        SourceStatus::Mock
    }

    pub fn refresh_weather(&self) -> SourceStatus {
        self.weather_summary_text
            .set(mock::WEATHER_SUMMARY.to_string());
        self.weather_advice_text
            .set(mock::WEATHER_ADVICE.to_string());
        SourceStatus::Mock
    }

    pub fn refresh_recommendations(&self) -> SourceStatus {
        log::info!("refresh recommendations: {}", mock::RECOMMENDATIONS_UNAVAILABLE);
        SourceStatus::Unavailable
    }

    pub fn update(&self, message: Message) -> SourceStatus {
        match message {
            Message::DateSelected { date } => self.select_date(date),
            Message::WeatherRefreshRequested => self.refresh_weather(),
            Message::RecommendationsRefreshRequested => self.refresh_recommendations(),
        }
    }
}
