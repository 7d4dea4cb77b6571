use serde::{Deserialize, Serialize};

/// Messages specific to SystemState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemMsg {
    // System control
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),

    // Status line
    ShowStatus { label: String, message: String },
    ShowError { label: String, message: String },
    ClearStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    use color_eyre::Result;

    #[test]
    fn test_system_msg_equality() {
        assert_eq!(SystemMsg::Quit, SystemMsg::Quit);
        assert_ne!(SystemMsg::Quit, SystemMsg::Suspend);
    }

    #[test]
    fn test_system_msg_serialization() -> Result<()> {
        let msg = SystemMsg::ShowStatus {
            label: "Weather".to_string(),
            message: "refreshed".to_string(),
        };
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: SystemMsg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);

        Ok(())
    }
}
