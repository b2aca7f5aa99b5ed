//! Page Configuration Loading
//!
//! `page.json` is embedded at build time. A document that fails to parse or
//! validate falls back to the built-in defaults.

use birthday_core::PageConfig;

const PAGE_JSON: &str = include_str!("../page.json");

pub fn load_config() -> PageConfig {
    match PageConfig::from_json(PAGE_JSON) {
        Ok(config) => {
            log::debug!("loaded page config for {}", config.name);
            config
        }
        Err(err) => {
            log::warn!("page.json rejected, using defaults: {}", err);
            PageConfig::default()
        }
    }
}
