//! Tabbed panels: typed model and the switching algorithm.
//!
//! Содержит:
//! - `config` - классы групп, маркер активности, политика для отсутствующей панели
//! - `error` - ошибки переключения
//! - `tree` - трейт `TabTree`, через который алгоритм читает и меняет UI-дерево
//! - `memory` - `MemoryTree`, дерево в памяти (тесты и headless)
//! - `switcher` - `TabSwitcher::activate`

pub mod config;
pub mod error;
pub mod memory;
pub mod switcher;
pub mod tree;

pub use config::{MissingPanelPolicy, TabsConfig, DEFAULT_CONFIG};
pub use error::TabSwitchError;
pub use memory::{ControlId, MemoryTree};
pub use switcher::TabSwitcher;
pub use tree::{PanelId, TabTree, Visibility};
