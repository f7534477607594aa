//! Вкладки SPV-страницы в браузере
//!
//! Содержит:
//! - `dom` - `DomTree`, реализация `TabTree` поверх живого DOM
//! - `storage` - загрузка `TabsConfig` из localStorage
//! - `component` - компонент `SpvTabs`

pub mod component;
pub mod dom;
pub mod storage;

pub use component::{SpvTabs, TabSpec};
pub use dom::{open_tab, DomTree};
pub use storage::load_tabs_config;
