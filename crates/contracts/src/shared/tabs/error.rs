use thiserror::Error;

/// Ошибки переключения вкладок
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabSwitchError {
    #[error("Panel not found: {panel_id}")]
    NotFound { panel_id: String },

    #[error("UI mutation failed: {0}")]
    Mutation(String),

    #[error("Invalid tabs config: {0}")]
    Config(String),
}
