//! Bottom-line status message

use crate::domain::text::single_line;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    MessageChanged { label: String, message: String },
    ErrorMessageChanged { label: String, message: String },
    MessageCleared,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBar {
    message: Option<String>,
    severity: Severity,
}

impl StatusBar {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    fn set_message(&mut self, label: &str, message: &str, severity: Severity) {
        let flat = single_line(message);
        self.message = Some(format!("[{label}] {flat}"));
        self.severity = severity;
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::MessageChanged { label, message } => {
                self.set_message(&label, &message, Severity::Info)
            }
            Message::ErrorMessageChanged { label, message } => {
                self.set_message(&format!("ERR: {label}"), &message, Severity::Error)
            }
            Message::MessageCleared => {
                self.message = None;
                self.severity = Severity::Info;
            }
        }
    }
}
