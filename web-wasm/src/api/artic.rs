//! Art Institute of Chicago 一覧API

use artwork_browser_common::{ArtworkPage, FetchError};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

fn network_error(e: JsValue) -> FetchError {
    FetchError::Network(format!("{:?}", e))
}

/// 1ページ分を取得
///
/// ステータス異常とJSONの形式違いもここで`FetchError`に分類する
pub async fn fetch_artworks(url: &str) -> Result<ArtworkPage, FetchError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(network_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(network_error)?;

    let window = web_sys::window().ok_or_else(|| FetchError::Network("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network_error)?;
    let resp: Response = resp_value.dyn_into().map_err(network_error)?;

    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }

    let json = JsFuture::from(resp.json().map_err(network_error)?)
        .await
        .map_err(|e| FetchError::Malformed(format!("{:?}", e)))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| FetchError::Malformed(e.to_string()))
}
