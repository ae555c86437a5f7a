//! Artwork Browser Web App (Leptos + WASM)

mod app;
mod components;
mod api;
mod config;
mod logger;
pub mod session_store;

use wasm_bindgen::prelude::*;
use leptos::prelude::*;
use log::LevelFilter;
use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    // 設定の警告も出せるよう、先にInfoで初期化しておく
    logger::init(LevelFilter::Info);
    let config = config::load_config();
    logger::init(config.log_level.parse().unwrap_or(LevelFilter::Info));

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
