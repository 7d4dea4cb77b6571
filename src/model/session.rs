//! Session scope
//!
//! A session lives for one run of the application. It owns the
//! [`DashboardState`] so that surfaces can come and go without losing it;
//! surfaces receive the session explicitly when they are activated.

use chrono::NaiveDate;

use crate::{
    domain::calendar::{Clock, SystemClock},
    infrastructure::config::CoupleConfig,
    model::dashboard::DashboardState,
};

#[derive(Debug, Clone)]
pub struct Session {
    couple: CoupleConfig,
    opened_on: NaiveDate,
    dashboard: DashboardState,
}

impl Session {
    pub fn new(couple: CoupleConfig, clock: &dyn Clock) -> Self {
        let opened_on = clock.today();
        let dashboard = DashboardState::new(couple.start_date, clock);
        log::info!("session opened on {opened_on}");
        Self {
            couple,
            opened_on,
            dashboard,
        }
    }

    pub fn couple(&self) -> &CoupleConfig {
        &self.couple
    }

    /// The calendar date the session was opened on.
    pub fn opened_on(&self) -> NaiveDate {
        self.opened_on
    }

    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(CoupleConfig::default(), &SystemClock)
    }
}
