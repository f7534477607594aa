//! SpvTabs component - полоса вкладок и их панели
//!
//! Кнопки получают класс группы контролов, панели - класс группы панелей и
//! `id`. Клик запускает `TabSwitcher` по живому DOM, триггер - нажатая кнопка.

use super::dom::open_tab;
use super::storage::load_tabs_config;
use contracts::shared::tabs::PanelId;
use leptos::html::Button;
use leptos::logging::log;
use leptos::prelude::*;
use web_sys::Element;

/// One tab: the panel id, the button label and the panel body.
#[derive(Clone)]
pub struct TabSpec {
    pub id: PanelId,
    pub label: String,
    pub content: ViewFn,
}

impl TabSpec {
    pub fn new(id: impl Into<PanelId>, label: impl Into<String>, content: impl Into<ViewFn>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            content: content.into(),
        }
    }
}

#[component]
pub fn SpvTabs(
    tabs: Vec<TabSpec>,
    /// Panel activated once the strip is mounted.
    #[prop(optional, into)]
    initial: Option<PanelId>,
) -> impl IntoView {
    let config = StoredValue::new(load_tabs_config());
    let (control_class, panel_class) =
        config.with_value(|c| (c.control_class.clone(), c.panel_class.clone()));

    log!("🔨 SpvTabs CREATED with {} tabs", tabs.len());
    on_cleanup(|| log!("💥 SpvTabs DESTROYED"));

    let switch = move |trigger: &Element, target: &PanelId| {
        config.with_value(|config| {
            if let Err(e) = open_tab(config, trigger, target) {
                log::error!("Tab switch to `{target}` failed: {e}");
            }
        })
    };

    let refs: Vec<(PanelId, NodeRef<Button>)> = tabs
        .iter()
        .map(|tab| (tab.id.clone(), NodeRef::new()))
        .collect();

    if let Some(initial) = initial {
        let refs = refs.clone();
        Effect::new(move |_| {
            let button = refs
                .iter()
                .find(|(id, _)| *id == initial)
                .and_then(|(_, node_ref)| node_ref.get());
            match button {
                Some(button) => switch(&button, &initial),
                None => log::warn!("Initial tab `{initial}` has no button"),
            }
        });
    }

    let buttons = tabs
        .iter()
        .zip(refs)
        .map(|(tab, (target, node_ref))| {
            view! {
                <button
                    class=control_class.clone()
                    node_ref=node_ref
                    on:click=move |_| {
                        if let Some(button) = node_ref.get() {
                            switch(&button, &target);
                        }
                    }
                >
                    {tab.label.clone()}
                </button>
            }
        })
        .collect_view();

    let panels = tabs
        .into_iter()
        .map(|tab| {
            view! {
                <div id=tab.id.to_string() class=panel_class.clone()>
                    {tab.content.run()}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="spv-tabs">
            <div class="spv-tabs__strip">{buttons}</div>
            {panels}
        </div>
    }
}
