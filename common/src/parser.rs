//! APIリクエスト/レスポンス処理
//!
//! 一覧APIのURLを組み立て、レスポンス本文を`ArtworkPage`にパースする

use crate::error::FetchError;
use crate::page::Page;
use crate::types::ArtworkPage;

/// 一覧APIのURLを組み立てる
///
/// # Arguments
/// * `api_url` - 一覧APIのベースURL
/// * `page` - 1始まりのページ番号
/// * `limit` - ページサイズを送る場合のみ`Some`
///
/// # Examples
/// ```
/// use artwork_browser_common::{build_page_url, Page};
///
/// let url = build_page_url("https://api.artic.edu/api/v1/artworks", Page::FIRST, None);
/// assert_eq!(url, "https://api.artic.edu/api/v1/artworks?page=1");
/// ```
pub fn build_page_url(api_url: &str, page: Page, limit: Option<u32>) -> String {
    let separator = if api_url.contains('?') { '&' } else { '?' };
    let mut url = format!("{}{}page={}", api_url, separator, page);
    if let Some(limit) = limit {
        url.push_str(&format!("&limit={}", limit));
    }
    url
}

/// レスポンス本文をパース
///
/// # Returns
/// * `Ok(ArtworkPage)` - レコードとページング情報
/// * `Err(FetchError::Malformed)` - JSONでない、または必須フィールドが欠けている場合
pub fn parse_artwork_page(body: &str) -> Result<ArtworkPage, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))
}
