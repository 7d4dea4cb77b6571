use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

/// Raw external events before translation into domain messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawMsg {
    Quit,
    Resume,
    Resize(u16, u16),
    Key(KeyEvent),
    Tick,
    Render,
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages from debug logs
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render)
    }
}
