use super::error::TabSwitchError;
use serde::{Deserialize, Serialize};

/// Default configuration, matching the markup of the SPV client page.
pub const DEFAULT_CONFIG: &str = r#"{
    "panel_class": "spvTabContent",
    "control_class": "spvTab",
    "active_class": "special",
    "shown_display": "block",
    "hidden_display": "none",
    "on_missing": "propagate"
}"#;

/// What `TabSwitcher::activate` does when the target panel id does not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingPanelPolicy {
    /// Hide everything, clear markers, then fail with `NotFound`.
    #[default]
    Propagate,
    /// Resolve the target first; if missing, log a warning and leave the tree untouched.
    Warn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    /// Class shared by every panel.
    pub panel_class: String,
    /// Class shared by every tab control.
    pub control_class: String,
    /// Class toggled on the currently selected control.
    pub active_class: String,
    /// CSS `display` value of a shown panel.
    pub shown_display: String,
    /// CSS `display` value of a hidden panel.
    pub hidden_display: String,
    pub on_missing: MissingPanelPolicy,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            panel_class: "spvTabContent".to_string(),
            control_class: "spvTab".to_string(),
            active_class: "special".to_string(),
            shown_display: "block".to_string(),
            hidden_display: "none".to_string(),
            on_missing: MissingPanelPolicy::Propagate,
        }
    }
}

impl TabsConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, TabSwitchError> {
        let config: TabsConfig =
            serde_json::from_str(json).map_err(|e| TabSwitchError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// The embedded default configuration.
    pub fn embedded() -> Result<Self, TabSwitchError> {
        Self::from_json(DEFAULT_CONFIG)
    }

    fn validate(&self) -> Result<(), TabSwitchError> {
        for (field, value) in [
            ("panel_class", &self.panel_class),
            ("control_class", &self.control_class),
            ("active_class", &self.active_class),
        ] {
            if value.trim().is_empty() || value.contains(char::is_whitespace) {
                return Err(TabSwitchError::Config(format!(
                    "`{field}` must be a single non-empty class name, got `{value}`"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = TabsConfig::embedded();
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), TabsConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = TabsConfig::from_json(r#"{"active_class": "active", "on_missing": "warn"}"#)
            .unwrap();
        assert_eq!(config.active_class, "active");
        assert_eq!(config.on_missing, MissingPanelPolicy::Warn);
        assert_eq!(config.panel_class, "spvTabContent");
        assert_eq!(config.control_class, "spvTab");
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = TabsConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TabSwitchError::Config(_)));
    }

    #[test]
    fn test_class_with_whitespace_rejected() {
        let err = TabsConfig::from_json(r#"{"active_class": "is active"}"#).unwrap_err();
        assert!(matches!(err, TabSwitchError::Config(msg) if msg.contains("active_class")));
    }

    #[test]
    fn test_unknown_policy_rejected() {
        assert!(TabsConfig::from_json(r#"{"on_missing": "ignore"}"#).is_err());
    }
}
