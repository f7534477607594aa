use super::error::TabSwitchError;
use super::tree::{PanelId, TabTree, Visibility};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a tab control in a `MemoryTree`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlId(String);

impl ControlId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl From<&str> for ControlId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryPanel {
    pub id: PanelId,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryControl {
    pub id: ControlId,
    pub active: bool,
}

/// UI tree held in memory. Panels and controls keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryTree {
    pub panels: Vec<MemoryPanel>,
    pub controls: Vec<MemoryControl>,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_panel(mut self, id: impl Into<PanelId>, visible: bool) -> Self {
        self.panels.push(MemoryPanel {
            id: id.into(),
            visible,
        });
        self
    }

    pub fn with_control(mut self, id: impl Into<ControlId>, active: bool) -> Self {
        self.controls.push(MemoryControl {
            id: id.into(),
            active,
        });
        self
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.panels
            .iter()
            .any(|p| p.id.as_str() == id && p.visible)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.controls.iter().any(|c| c.id.0 == id && c.active)
    }

    pub fn visible_panels(&self) -> Vec<&PanelId> {
        self.panels
            .iter()
            .filter(|p| p.visible)
            .map(|p| &p.id)
            .collect()
    }

    pub fn active_controls(&self) -> Vec<&ControlId> {
        self.controls
            .iter()
            .filter(|c| c.active)
            .map(|c| &c.id)
            .collect()
    }
}

impl TabTree for MemoryTree {
    type Panel = PanelId;
    type Control = ControlId;

    fn panels(&self) -> Vec<PanelId> {
        self.panels.iter().map(|p| p.id.clone()).collect()
    }

    fn controls(&self) -> Vec<ControlId> {
        self.controls.iter().map(|c| c.id.clone()).collect()
    }

    fn find_panel(&self, id: &PanelId) -> Option<PanelId> {
        self.panels
            .iter()
            .find(|p| &p.id == id)
            .map(|p| p.id.clone())
    }

    fn set_visibility(
        &mut self,
        panel: &PanelId,
        visibility: Visibility,
    ) -> Result<(), TabSwitchError> {
        let mut found = false;
        for p in self.panels.iter_mut().filter(|p| &p.id == panel) {
            p.visible = visibility == Visibility::Shown;
            found = true;
        }
        if found {
            Ok(())
        } else {
            Err(TabSwitchError::Mutation(format!(
                "panel `{panel}` is not part of the tree"
            )))
        }
    }

    fn set_active(&mut self, control: &ControlId, active: bool) -> Result<(), TabSwitchError> {
        let mut found = false;
        for c in self.controls.iter_mut().filter(|c| &c.id == control) {
            c.active = active;
            found = true;
        }
        if found {
            Ok(())
        } else {
            Err(TabSwitchError::Mutation(format!(
                "control `{control}` is not part of the tree"
            )))
        }
    }
}
