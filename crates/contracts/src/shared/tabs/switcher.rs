use super::config::{MissingPanelPolicy, TabsConfig};
use super::error::TabSwitchError;
use super::tree::{PanelId, TabTree, Visibility};

/// Shows one panel and marks one control active, resetting all the others.
#[derive(Debug, Clone, Copy)]
pub struct TabSwitcher<'a> {
    config: &'a TabsConfig,
}

impl<'a> TabSwitcher<'a> {
    pub fn new(config: &'a TabsConfig) -> Self {
        Self { config }
    }

    /// Activate `target` on behalf of `trigger`.
    ///
    /// Order of mutations:
    /// 1. hide every panel
    /// 2. clear the active marker from every control
    /// 3. show the target panel
    /// 4. mark the trigger active
    ///
    /// With `MissingPanelPolicy::Propagate` a missing target fails at step 3,
    /// after steps 1-2 were applied. With `MissingPanelPolicy::Warn` the target
    /// is resolved first and a miss leaves the tree untouched.
    pub fn activate<T: TabTree>(
        &self,
        tree: &mut T,
        trigger: &T::Control,
        target: &PanelId,
    ) -> Result<(), TabSwitchError> {
        if self.config.on_missing == MissingPanelPolicy::Warn && tree.find_panel(target).is_none()
        {
            log::warn!("tab panel `{target}` not found, switch skipped");
            return Ok(());
        }

        for panel in tree.panels() {
            tree.set_visibility(&panel, Visibility::Hidden)?;
        }
        for control in tree.controls() {
            tree.set_active(&control, false)?;
        }

        let panel = tree
            .find_panel(target)
            .ok_or_else(|| TabSwitchError::NotFound {
                panel_id: target.to_string(),
            })?;
        tree.set_visibility(&panel, Visibility::Shown)?;
        tree.set_active(trigger, true)?;

        log::debug!("tab panel `{target}` activated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::tabs::memory::{ControlId, MemoryTree};

    fn three_tabs() -> MemoryTree {
        MemoryTree::new()
            .with_panel("P1", true)
            .with_panel("P2", true)
            .with_panel("P3", true)
            .with_control("T1", false)
            .with_control("T2", false)
            .with_control("T3", false)
    }

    fn assert_selected(tree: &MemoryTree, panel: &str, control: &str) {
        assert_eq!(tree.visible_panels(), vec![&PanelId::from(panel)]);
        assert_eq!(tree.active_controls(), vec![&ControlId::from(control)]);
    }

    #[test]
    fn test_activate_shows_target_only() {
        let config = TabsConfig::default();
        let switcher = TabSwitcher::new(&config);
        let mut tree = three_tabs();

        switcher
            .activate(&mut tree, &ControlId::from("T2"), &PanelId::from("P2"))
            .unwrap();

        assert!(!tree.is_visible("P1"));
        assert!(tree.is_visible("P2"));
        assert!(!tree.is_visible("P3"));
        assert!(tree.is_active("T2"));
        assert!(!tree.is_active("T1"));
        assert!(!tree.is_active("T3"));
    }

    #[test]
    fn test_second_activation_moves_selection() {
        let config = TabsConfig::default();
        let switcher = TabSwitcher::new(&config);
        let mut tree = three_tabs();

        switcher
            .activate(&mut tree, &ControlId::from("T2"), &PanelId::from("P2"))
            .unwrap();
        switcher
            .activate(&mut tree, &ControlId::from("T1"), &PanelId::from("P1"))
            .unwrap();

        assert_selected(&tree, "P1", "T1");
    }

    #[test]
    fn test_missing_panel_propagates_after_reset() {
        let config = TabsConfig::default();
        let switcher = TabSwitcher::new(&config);
        let mut tree = three_tabs().with_control("T0", true);

        let err = switcher
            .activate(&mut tree, &ControlId::from("T1"), &PanelId::from("P_missing"))
            .unwrap_err();

        assert_eq!(
            err,
            TabSwitchError::NotFound {
                panel_id: "P_missing".to_string()
            }
        );
        assert!(tree.visible_panels().is_empty());
        assert!(tree.active_controls().is_empty());
    }

    #[test]
    fn test_missing_panel_warn_policy_is_noop() {
        let config = TabsConfig {
            on_missing: MissingPanelPolicy::Warn,
            ..TabsConfig::default()
        };
        let switcher = TabSwitcher::new(&config);
        let mut tree = three_tabs();
        switcher
            .activate(&mut tree, &ControlId::from("T3"), &PanelId::from("P3"))
            .unwrap();
        let before = tree.clone();

        switcher
            .activate(&mut tree, &ControlId::from("T1"), &PanelId::from("P_missing"))
            .unwrap();

        assert_eq!(tree, before);
        assert_selected(&tree, "P3", "T3");
    }

    #[test]
    fn test_activate_is_idempotent() {
        let config = TabsConfig::default();
        let switcher = TabSwitcher::new(&config);
        let mut once = three_tabs();
        let mut twice = three_tabs();

        switcher
            .activate(&mut once, &ControlId::from("T3"), &PanelId::from("P3"))
            .unwrap();
        for _ in 0..2 {
            switcher
                .activate(&mut twice, &ControlId::from("T3"), &PanelId::from("P3"))
                .unwrap();
        }

        assert_eq!(once, twice);
    }

    #[test]
    fn test_last_call_wins_over_sequences() {
        let config = TabsConfig::default();
        let switcher = TabSwitcher::new(&config);
        let pairs = [("T1", "P1"), ("T2", "P2"), ("T3", "P3")];
        let sequences: [&[usize]; 6] = [
            &[0],
            &[2, 1],
            &[1, 1, 0],
            &[0, 2, 2, 1],
            &[2, 0, 1, 2, 0],
            &[1, 2, 0, 0, 2, 1, 1],
        ];

        for sequence in sequences {
            let mut tree = three_tabs();
            for &i in sequence {
                let (control, panel) = pairs[i];
                switcher
                    .activate(&mut tree, &ControlId::from(control), &PanelId::from(panel))
                    .unwrap();
            }
            let (control, panel) = pairs[*sequence.last().unwrap()];
            assert_selected(&tree, panel, control);
        }
    }

    #[test]
    fn test_mutation_error_stops_before_marking() {
        let config = TabsConfig::default();
        let switcher = TabSwitcher::new(&config);
        let mut tree = three_tabs();

        let err = switcher
            .activate(&mut tree, &ControlId::from("T9"), &PanelId::from("P1"))
            .unwrap_err();

        assert!(matches!(err, TabSwitchError::Mutation(_)));
        assert_eq!(tree.visible_panels(), vec![&PanelId::from("P1")]);
        assert!(tree.active_controls().is_empty());
    }
}
