//! 作品データの型定義
//!
//! Web(WASM)とテストで共有される型:
//! - Artwork: 1行分の作品レコード
//! - Pagination: APIのページングメタデータ
//! - ArtworkPage: 一覧APIの1ページ分のレスポンス

use serde::{Deserialize, Deserializer, Serialize};

/// 作品レコード
///
/// 取得後に変更されることはなく、ページ取得ごとに丸ごと置き換えられる。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    /// 行キー
    pub id: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub place_of_origin: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub artist_display: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub inscriptions: String,

    /// 制作年（開始）。年代不明の作品はnull
    #[serde(default)]
    pub date_start: Option<i32>,

    /// 制作年（終了）
    #[serde(default)]
    pub date_end: Option<i32>,
}

/// ページングメタデータ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// 総レコード数
    pub total: u64,

    #[serde(default)]
    pub limit: Option<u32>,

    #[serde(default)]
    pub offset: Option<u64>,

    #[serde(default)]
    pub total_pages: Option<u32>,

    #[serde(default)]
    pub current_page: Option<u32>,
}

/// 一覧APIのレスポンス（未知のフィールドは無視）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkPage {
    pub pagination: Pagination,
    pub data: Vec<Artwork>,
}

/// JSONのnullを型のデフォルト値として読む
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
