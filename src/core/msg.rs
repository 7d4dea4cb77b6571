use serde::{Deserialize, Serialize};

pub mod system;
pub mod ui;

use crate::model::dashboard::Message as HomeMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent
/// These are processed by the update function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Msg {
    // Quit, suspend, resize and status line (delegated to SystemState)
    System(SystemMsg),

    // Tabs and calendar cursor (delegated to UiState)
    Ui(UiMsg),

    // Dashboard operations (delegated to DashboardState)
    Home(HomeMsg),
}
