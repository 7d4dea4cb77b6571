pub mod system;
pub mod ui;

use crate::{
    domain::calendar::{Clock, SystemClock},
    infrastructure::config::Config,
    model::{session::Session, status_bar::StatusBar},
};

use system::SystemState;
use ui::UiState;

/// Unified application state
///
/// Cloning is cheap for the session: the clone shares its dashboard cells.
#[derive(Debug, Clone)]
pub struct AppState {
    pub session: Session,
    pub ui: UiState,
    pub system: SystemState,
    pub status_bar: StatusBar,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Opens a session for the configured couple using the local clock.
    pub fn new_with_config(config: Config) -> Self {
        Self::new_with_clock(config, &SystemClock)
    }

    pub fn new_with_clock(config: Config, clock: &dyn Clock) -> Self {
        let session = Session::new(config.couple.clone(), clock);
        let ui = UiState::new(session.opened_on());
        Self {
            session,
            ui,
            system: SystemState::default(),
            status_bar: StatusBar::default(),
            config: ConfigState { config },
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new_with_config(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{core::state::ui::Tab, domain::calendar::FixedClock};

    #[test]
    fn test_app_state_new_with_clock() {
        let today = NaiveDate::from_ymd_opt(2023, 4, 1).expect("valid date");
        let state = AppState::new_with_clock(Config::default(), &FixedClock(today));

        assert_eq!(state.ui.active_tab, Tab::Home);
        assert_eq!(state.ui.selected_date, today);
        assert!(!state.system.should_quit);
        assert!(state.status_bar.message().is_none());
        assert_eq!(
            state.session.dashboard().days_together_text().get(),
            "290 days together"
        );
    }
}
