use contracts::shared::tabs::TabsConfig;
use web_sys::window;

const TABS_CONFIG_KEY: &str = "spv_tabs_config";

fn read_stored_config() -> Option<String> {
    window()?
        .local_storage()
        .ok()??
        .get_item(TABS_CONFIG_KEY)
        .ok()?
}

/// Load the tabs config: localStorage override first, embedded default otherwise.
pub fn load_tabs_config() -> TabsConfig {
    if let Some(json) = read_stored_config() {
        match TabsConfig::from_json(&json) {
            Ok(config) => {
                log::info!("Loading tabs config from localStorage `{TABS_CONFIG_KEY}`");
                return config;
            }
            Err(e) => log::warn!("Ignoring stored tabs config: {e}"),
        }
    }

    log::info!("Using default embedded tabs configuration");
    TabsConfig::embedded().unwrap_or_default()
}
