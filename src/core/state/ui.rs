use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{
    core::{cmd::Cmd, msg::ui::UiMsg},
    domain::calendar::shift_days,
};

/// Top-level screens, in tab-bar order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Tab {
    #[default]
    Home,
    Discover,
    Moments,
}

impl Tab {
    pub fn index(self) -> usize {
        Tab::iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        let tabs: Vec<Tab> = Tab::iter().collect();
        tabs[(self.index() + 1) % tabs.len()]
    }

    pub fn prev(self) -> Self {
        let tabs: Vec<Tab> = Tab::iter().collect();
        tabs[(self.index() + tabs.len() - 1) % tabs.len()]
    }

    pub fn titles() -> Vec<String> {
        Tab::iter().map(|t| t.to_string()).collect()
    }
}

/// UI-related state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub active_tab: Tab,
    pub selected_date: NaiveDate,
    today: NaiveDate,
}

impl UiState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            active_tab: Tab::Home,
            selected_date: today,
            today,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn is_home(&self) -> bool {
        self.active_tab == Tab::Home
    }

    pub fn update(&mut self, msg: UiMsg) -> Vec<Cmd> {
        match msg {
            UiMsg::NextTab => self.active_tab = self.active_tab.next(),
            UiMsg::PrevTab => self.active_tab = self.active_tab.prev(),
            UiMsg::ShowTab(tab) => self.active_tab = tab,
            UiMsg::ShiftSelectedDate(days) => {
                self.selected_date = shift_days(self.selected_date, days);
            }
            UiMsg::SelectToday => self.selected_date = self.today,
        }
        vec![]
    }
}
