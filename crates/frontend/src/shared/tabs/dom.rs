//! `TabTree` over the live document.

use contracts::shared::tabs::{PanelId, TabSwitchError, TabSwitcher, TabTree, TabsConfig, Visibility};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleDeclaration, Document, Element, HtmlCollection, HtmlElement, SvgElement};

pub struct DomTree<'a> {
    document: Document,
    config: &'a TabsConfig,
}

impl<'a> DomTree<'a> {
    pub fn new(document: Document, config: &'a TabsConfig) -> Self {
        Self { document, config }
    }

    /// Tree over `window.document`, if there is one.
    pub fn current(config: &'a TabsConfig) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self::new(document, config))
    }
}

fn js_error(e: JsValue) -> TabSwitchError {
    TabSwitchError::Mutation(e.as_string().unwrap_or_else(|| format!("{e:?}")))
}

// HtmlCollection is live; copy it out before anything is mutated.
fn collect_elements(collection: HtmlCollection) -> Vec<Element> {
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect()
}

// Inline style of HTML and SVG elements; other namespaces have none.
fn inline_style(el: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        return Some(html.style());
    }
    el.dyn_ref::<SvgElement>().map(|svg| svg.style())
}

impl TabTree for DomTree<'_> {
    type Panel = Element;
    type Control = Element;

    fn panels(&self) -> Vec<Element> {
        collect_elements(self.document.get_elements_by_class_name(&self.config.panel_class))
    }

    fn controls(&self) -> Vec<Element> {
        collect_elements(self.document.get_elements_by_class_name(&self.config.control_class))
    }

    fn find_panel(&self, id: &PanelId) -> Option<Element> {
        self.document.get_element_by_id(id.as_str())
    }

    fn set_visibility(
        &mut self,
        panel: &Element,
        visibility: Visibility,
    ) -> Result<(), TabSwitchError> {
        let display = visibility.css_display(self.config);
        match inline_style(panel) {
            Some(style) => style.set_property("display", display).map_err(js_error),
            None => {
                log::warn!(
                    "Panel <{}> has no inline style, overwriting its style attribute",
                    panel.tag_name().to_lowercase()
                );
                panel
                    .set_attribute("style", &format!("display: {display}"))
                    .map_err(js_error)
            }
        }
    }

    fn set_active(&mut self, control: &Element, active: bool) -> Result<(), TabSwitchError> {
        let class_list = control.class_list();
        if active {
            class_list.add_1(&self.config.active_class).map_err(js_error)
        } else {
            class_list.remove_1(&self.config.active_class).map_err(js_error)
        }
    }
}

/// Run `TabSwitcher` against the live document.
pub fn open_tab(
    config: &TabsConfig,
    trigger: &Element,
    target: &PanelId,
) -> Result<(), TabSwitchError> {
    let mut tree = DomTree::current(config)
        .ok_or_else(|| TabSwitchError::Mutation("document is not available".to_string()))?;
    TabSwitcher::new(config).activate(&mut tree, trigger, target)
}
