//! Dialog Configuration

use fos_dom::NodeId;
use serde::{Deserialize, Serialize};

use crate::constants::CLOSE_ACTION;
use crate::focus_scope::FocusTrapFactory;

/// Dialog behaviour options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogConfig {
    /// Action reported when Escape closes the dialog. Empty disables Escape.
    pub escape_key_action: String,

    /// Action reported when a scrim click closes the dialog. Empty disables it.
    pub scrim_click_action: String,

    /// Stack and reverse buttons automatically when they wrap
    pub auto_stack_buttons: bool,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            escape_key_action: CLOSE_ACTION.to_string(),
            scrim_click_action: CLOSE_ACTION.to_string(),
            auto_stack_buttons: true,
        }
    }
}

/// Construction options for `Dialog::attach_to_with`
#[derive(Default)]
pub struct DialogOptions {
    /// Applied after markup is read. `None` keeps defaults and any stacked markup.
    pub config: Option<DialogConfig>,
    /// Replaces the default focus trap
    pub focus_trap_factory: Option<FocusTrapFactory>,
    /// Element focused on open instead of the first tabbable
    pub initial_focus: Option<NodeId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DialogConfig::default();
        assert_eq!(config.escape_key_action, "close");
        assert_eq!(config.scrim_click_action, "close");
        assert!(config.auto_stack_buttons);

        let options = DialogOptions::default();
        assert!(options.config.is_none());
        assert!(options.focus_trap_factory.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: DialogConfig = serde_json::from_str(r#"{"escape_key_action": ""}"#).unwrap();
        assert_eq!(config.escape_key_action, "");
        assert_eq!(config.scrim_click_action, "close");
        assert!(config.auto_stack_buttons);
    }

    #[test]
    fn test_serializes_all_fields() {
        let json = serde_json::to_value(DialogConfig::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "escape_key_action": "close",
                "scrim_click_action": "close",
                "auto_stack_buttons": true,
            })
        );
    }
}
