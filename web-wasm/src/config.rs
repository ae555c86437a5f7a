//! ページに埋め込まれた設定の読み込み
//!
//! `<script id="artwork-browser-config" type="application/json">`があればそれを使い、
//! なければデフォルト値。

use artwork_browser_common::BrowserConfig;

const CONFIG_ELEMENT_ID: &str = "artwork-browser-config";

pub fn load_config() -> BrowserConfig {
    let Some(json) = embedded_config() else {
        return BrowserConfig::default();
    };

    match BrowserConfig::from_json(&json) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring invalid #{}: {}", CONFIG_ELEMENT_ID, e);
            BrowserConfig::default()
        }
    }
}

fn embedded_config() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
        .filter(|text| !text.trim().is_empty())
}
