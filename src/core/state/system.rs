use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};
use crate::model::status_bar::{Message as StatusBarMessage, StatusBar};

/// System-related state
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
}

impl SystemState {
    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg, status_bar: &mut StatusBar) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![Cmd::Tui(TuiCommand::Suspend)]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![]
            }

            SystemMsg::Resize(width, height) => {
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            SystemMsg::ShowStatus { label, message } => {
                status_bar.update(StatusBarMessage::MessageChanged { label, message });
                vec![]
            }

            SystemMsg::ShowError { label, message } => {
                log::warn!("{label}: {message}");
                status_bar.update(StatusBarMessage::ErrorMessageChanged { label, message });
                vec![]
            }

            SystemMsg::ClearStatus => {
                status_bar.update(StatusBarMessage::MessageCleared);
                vec![]
            }
        }
    }
}
