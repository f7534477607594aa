use super::config::TabsConfig;
use super::error::TabSwitchError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a panel (the element id in the DOM).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(String);

impl PanelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PanelId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PanelId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    /// CSS `display` value for this state.
    pub fn css_display(self, config: &TabsConfig) -> &str {
        match self {
            Visibility::Shown => &config.shown_display,
            Visibility::Hidden => &config.hidden_display,
        }
    }
}

/// The UI tree that owns panels and tab controls.
///
/// `TabSwitcher` never queries the document on its own: everything it reads
/// or changes goes through this trait, so the live DOM and `MemoryTree`
/// are interchangeable.
pub trait TabTree {
    type Panel;
    type Control;

    /// Every panel in the panel group, in document order.
    fn panels(&self) -> Vec<Self::Panel>;

    /// Every control in the control group, in document order.
    fn controls(&self) -> Vec<Self::Control>;

    fn find_panel(&self, id: &PanelId) -> Option<Self::Panel>;

    fn set_visibility(
        &mut self,
        panel: &Self::Panel,
        visibility: Visibility,
    ) -> Result<(), TabSwitchError>;

    fn set_active(&mut self, control: &Self::Control, active: bool)
        -> Result<(), TabSwitchError>;
}
