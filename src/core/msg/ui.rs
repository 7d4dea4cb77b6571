use serde::{Deserialize, Serialize};

use crate::core::state::ui::Tab;

/// UI-specific messages for UiState transitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiMsg {
    NextTab,
    PrevTab,
    ShowTab(Tab),

    /// Moves the calendar cursor by a number of days (negative moves back).
    ShiftSelectedDate(i64),
    SelectToday,
}
